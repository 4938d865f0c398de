//! Probe errors

use collision_core::config::ConfigError;

/// Errors that stop a probe run
#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    /// Config file could not be read or parsed
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Scenario file could not be read or parsed
    #[error("Scenario error in {path}: {message}")]
    Scenario {
        /// Scenario file
        path: String,
        /// What went wrong
        message: String,
    },

    /// Cases disagreed with their expectations
    #[error("{count} of {total} cases did not match their expectation")]
    Mismatch {
        /// Failing cases
        count: usize,
        /// Cases run
        total: usize,
    },
}
