//! Determinism probe: runs a configured workload over the math library and
//! reduces it to a checksum that must match across machines and builds.

pub mod config;
pub mod workload;

pub use config::{load_config, ProbeConfig, ProbeParams, DEFAULT_CONFIG_PATH};
pub use workload::{check_repeatable, run_round, run_workload};

use tracing::{error, info, warn};

use crate::snapshot::{first_divergence, load_trace, save_trace, Trace};

/// Outcome of comparing a fresh trace with the configured reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReferenceCheck {
    NotConfigured,
    Matches,
    Diverges { index: usize },
}

#[derive(Clone, Debug)]
pub struct ProbeReport {
    pub trace: Trace,
    pub checksum: u64,
    pub reference: ReferenceCheck,
}

impl ProbeReport {
    pub fn is_mismatch(&self) -> bool {
        matches!(self.reference, ReferenceCheck::Diverges { .. })
    }
}

/// Runs the workload, writes the trace, and compares it with the reference.
pub fn run_probe(config: &ProbeConfig) -> Result<ProbeReport, Box<dyn std::error::Error>> {
    let params = config.params()?;
    if params.seed == 0 {
        return Err(crate::fixed_math::FixedError::ZeroSeed.into());
    }
    info!(
        "Probe '{}': seed {}, {} rounds x {} samples",
        config.label, params.seed, params.rounds, params.samples_per_round
    );

    let trace = Trace::new(config.label.clone(), run_workload(&params));
    let checksum = trace.checksum();
    info!("Checksum {:016x} over {} values", checksum, trace.values.len());

    if let Some(parent) = std::path::Path::new(&config.trace_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    save_trace(&config.trace_path, &trace)?;
    info!("Trace written to {}", config.trace_path);

    let reference = match &config.reference_trace {
        None => ReferenceCheck::NotConfigured,
        Some(path) => {
            let expected = load_trace(path)?;
            match first_divergence(&expected.values, &trace.values) {
                None => {
                    info!("Matches reference {} ({})", path, expected.label);
                    ReferenceCheck::Matches
                }
                Some(index) => {
                    error!(
                        "Diverges from reference {} at value {}: expected {:?}, got {:?}",
                        path,
                        index,
                        expected.values.get(index),
                        trace.values.get(index)
                    );
                    ReferenceCheck::Diverges { index }
                }
            }
        }
    };
    if reference == ReferenceCheck::NotConfigured {
        warn!("No reference trace configured, nothing to compare against");
    }

    Ok(ProbeReport { trace, checksum, reference })
}
