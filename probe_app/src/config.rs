//! Probe settings

use std::path::{Path, PathBuf};

use collision_core::config::Config;
use serde::{Deserialize, Serialize};

/// Settings read from `probe.toml` (or a `.ron` file with the same fields)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Scenario file; relative paths are resolved against the config file's directory
    pub scenario: PathBuf,

    /// Log filter used when `RUST_LOG` is unset; empty defers to `RUST_LOG` alone
    pub log_filter: String,

    /// Exit with an error when any case disagrees with its expectation
    pub fail_on_mismatch: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            scenario: PathBuf::from("scenarios/basic.ron"),
            log_filter: "info".to_string(),
            fail_on_mismatch: true,
        }
    }
}

impl Config for ProbeConfig {}

impl ProbeConfig {
    /// Scenario path as seen from the working directory
    pub fn scenario_path(&self, config_path: &Path) -> PathBuf {
        if self.scenario.is_absolute() {
            return self.scenario.clone();
        }
        config_path
            .parent()
            .map_or_else(|| self.scenario.clone(), |dir| dir.join(&self.scenario))
    }
}
