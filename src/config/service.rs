//! Loading the configuration file.

use std::path::{Path, PathBuf};

use super::types::AppConfig;
use crate::error::ConfigError;

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("fluent-patch"))
}

/// Default location of the config file.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoDirFound)
}

/// Read and parse the config file at `path`.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    let config = toml::from_str::<AppConfig>(&content).map_err(ConfigError::ParseFailed)?;
    Ok(Some(config))
}

/// Load the configuration, falling back to defaults on any problem.
///
/// `path` overrides the default location. Validation warnings are logged.
pub fn load_config(path: Option<&Path>) -> AppConfig {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                return AppConfig::default();
            }
        },
    };

    let config = match read_config(&config_path) {
        Ok(Some(config)) => {
            tracing::info!("Loaded config from {:?}", config_path);
            config
        }
        Ok(None) => {
            tracing::debug!("Config file not found at {:?}, using defaults", config_path);
            AppConfig::default()
        }
        Err(e) => {
            tracing::warn!("{} at {:?}, using defaults", e, config_path);
            AppConfig::default()
        }
    };

    for warning in super::validation::validate_config(&config) {
        tracing::warn!("Config validation: {} - {}", warning.field, warning.message);
    }

    config
}
