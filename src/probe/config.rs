use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::fixed_math::{Fixed, FixedError};

pub const DEFAULT_CONFIG_PATH: &str = "assets/probe_config.ron";

/// Determinism probe settings.
///
/// Numeric tuning values are decimal strings and go through
/// [`Fixed::from_str_exact`], so loading a config never touches floats.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ProbeConfig {
    pub label: String,
    pub seed: u32,
    pub rounds: u32,
    pub samples_per_round: u32,

    // Workload shape (decimal strings)
    pub scalar_range: String,
    pub angle_step: String,
    pub exp_range: String,

    // Output
    pub trace_path: String,
    pub reference_trace: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            label: "default".to_string(),
            seed: 12_345,
            rounds: 200,
            samples_per_round: 16,
            scalar_range: "1000.0".to_string(),
            angle_step: "0.0314".to_string(),
            exp_range: "8.0".to_string(),
            trace_path: "logs/probe_trace.bin".to_string(),
            reference_trace: None,
        }
    }
}

/// [`ProbeConfig`] with its decimal strings resolved to [`Fixed`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeParams {
    pub seed: u32,
    pub rounds: u32,
    pub samples_per_round: u32,
    pub scalar_range: Fixed,
    pub angle_step: Fixed,
    pub exp_range: Fixed,
}

impl ProbeConfig {
    pub fn params(&self) -> Result<ProbeParams, FixedError> {
        Ok(ProbeParams {
            seed: self.seed,
            rounds: self.rounds,
            samples_per_round: self.samples_per_round,
            scalar_range: Fixed::from_str_exact(&self.scalar_range)?,
            angle_step: Fixed::from_str_exact(&self.angle_step)?,
            exp_range: Fixed::from_str_exact(&self.exp_range)?,
        })
    }
}

/// Reads a RON config, falling back to the defaults on any failure.
pub fn load_config(path: &str) -> ProbeConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match ron::from_str::<ProbeConfig>(&contents) {
            Ok(config) => {
                info!("Loaded probe config from {}", path);
                config
            }
            Err(e) => {
                error!("Failed to parse probe config: {}", e);
                error!("Using default ProbeConfig");
                ProbeConfig::default()
            }
        },
        Err(e) => {
            error!("Failed to read {}: {}", path, e);
            error!("Using default ProbeConfig");
            ProbeConfig::default()
        }
    }
}
