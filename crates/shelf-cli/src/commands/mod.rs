//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod init;
pub mod run;
pub mod suggest;

use shelf_adapters::TomlScenarioSource;
use shelf_core::application::ScenarioService;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Scenario service reading `path`, with the configured default limits.
fn scenario_service(path: &std::path::Path, config: &AppConfig) -> CliResult<ScenarioService> {
    let limits = config.limits().map_err(|e| CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    })?;
    Ok(ScenarioService::new(
        Box::new(TomlScenarioSource::new(path)),
        limits,
    ))
}
