//! Collision probe
//!
//! Loads a probe config (TOML or RON), runs the scenario it points at through
//! the collision library and logs each result.
//!
//! Usage: `probe_app [CONFIG]`, defaulting to `probe.toml`.

mod config;
mod error;
mod runner;
mod scenario;

use std::path::PathBuf;

use collision_core::config::Config;
use collision_core::foundation::logging;
use log::info;

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::scenario::Scenario;

const DEFAULT_CONFIG: &str = "probe.toml";

fn main() -> Result<(), ProbeError> {
    let config_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);

    let config = ProbeConfig::load_from_file(&config_path)?;
    if config.log_filter.is_empty() {
        logging::init();
    } else {
        logging::init_with_filter(&config.log_filter);
    }
    info!("Loaded probe config from {}", config_path.display());

    let scenario_path = config.scenario_path(&config_path);
    let scenario = Scenario::load(&scenario_path)?;
    info!("Running {} cases from {}", scenario.cases.len(), scenario_path.display());

    runner::run(&scenario).into_result(config.fail_on_mismatch)?;
    Ok(())
}
