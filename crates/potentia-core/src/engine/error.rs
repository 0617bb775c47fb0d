use thiserror::Error;

use super::config::ConfigError;
use crate::core::error::DomainError;
use crate::core::sampling::SamplingError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Domain error: {source}")]
    Domain {
        #[from]
        source: DomainError,
    },

    #[error("Sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error(
        "Interior and exterior branches disagree at the surface: relative gap {gap:e} exceeds {tolerance:e}"
    )]
    Discontinuity { gap: f64, tolerance: f64 },
}
