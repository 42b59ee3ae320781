//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::GatesimConfig;
use std::path::Path;

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "gatesim.toml";

/// Loads the configuration from `<project_dir>/gatesim.toml`.
///
/// A missing file is not an error: the defaults are returned instead.
pub fn load_config(project_dir: &Path) -> Result<GatesimConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(GatesimConfig::default());
    }
    load_config_file(&config_path)
}

/// Loads and validates the configuration at an explicit path.
pub fn load_config_file(path: &Path) -> Result<GatesimConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<GatesimConfig, ConfigError> {
    let config: GatesimConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &GatesimConfig) -> Result<(), ConfigError> {
    if config.simulation.max_passes == 0 {
        return Err(ConfigError::InvalidValue {
            key: "simulation.max_passes",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
