use lockstep_math::probe::{self, ReferenceCheck};

use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn setup_file_logging() -> String {
    // Create logs directory if it doesn't exist
    let log_dir = PathBuf::from("logs");
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create logs directory: {}", e);
    }

    // Clean up old log files, keeping only the last 25
    cleanup_old_logs(&log_dir, 25);

    // Generate timestamped filename
    let now = chrono::Local::now();
    let log_filename = format!("probe_{}.log", now.format("%Y%m%d_%H%M%S"));
    let log_file_path = log_dir.join(&log_filename);
    let log_path_str = log_file_path.to_string_lossy().to_string();

    let file_appender = RollingFileAppender::new(
        Rotation::NEVER, // One file per run
        &log_dir,
        &log_filename
    );

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lockstep_math=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    log_path_str
}

fn cleanup_old_logs(log_dir: &Path, keep_count: usize) {
    if let Ok(entries) = fs::read_dir(log_dir) {
        let mut log_files: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(|s| s.starts_with("probe_") && s.ends_with(".log"))
                    .unwrap_or(false)
            })
            .collect();

        // Sort by modified time (oldest first)
        log_files.sort_by_key(|e| e.metadata().ok().and_then(|m| m.modified().ok()));

        // The file for this run is created afterwards, so leave room for it
        if log_files.len() >= keep_count {
            for file in log_files.iter().take(log_files.len() + 1 - keep_count) {
                let _ = fs::remove_file(file.path());
            }
        }
    }
}

fn main() -> ExitCode {
    let log_file = setup_file_logging();

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║  Lockstep Math Probe - Logging to file                   ║");
    println!("╠══════════════════════════════════════════════════════════╣");
    println!("║  Log file: {:<45} ║", log_file);
    println!("╚══════════════════════════════════════════════════════════╝");

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| probe::DEFAULT_CONFIG_PATH.to_string());
    let config = probe::load_config(&config_path);

    let report = match probe::run_probe(&config) {
        Ok(report) => report,
        Err(e) => {
            error!("Probe failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║  Values:   {:<45} ║", report.trace.values.len());
    println!("║  Checksum: {:<45} ║", format!("{:016x}", report.checksum));
    println!("╚══════════════════════════════════════════════════════════╝");

    match report.reference {
        ReferenceCheck::Diverges { index } => {
            error!("Determinism check FAILED at value {}", index);
            ExitCode::FAILURE
        }
        ReferenceCheck::Matches => {
            info!("Determinism check passed");
            ExitCode::SUCCESS
        }
        ReferenceCheck::NotConfigured => ExitCode::SUCCESS,
    }
}
