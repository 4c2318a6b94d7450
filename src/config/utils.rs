//! Configuration utilities - loading and access helpers
//!
//! - Loading configuration from disk (missing file means defaults)
//! - A process-wide instance for binaries that want one
use super::schemas::GasStationConfig;
use crate::errors::{GasError, GasResult};
use crate::logger::{self, LogTag};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::path::Path;

/// Global configuration instance
pub static CONFIG: OnceCell<RwLock<GasStationConfig>> = OnceCell::new();

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/gasstation.toml";

/// Load and validate a configuration file
///
/// A missing file is not an error: the defaults are used instead.
pub fn load_config_from_path(path: impl AsRef<Path>) -> GasResult<GasStationConfig> {
    let path = path.as_ref();

    let config = if path.exists() {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GasError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        toml::from_str::<GasStationConfig>(&contents).map_err(|e| {
            GasError::Config(format!("Failed to parse config file '{}': {}", path.display(), e))
        })?
    } else {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path.display()),
        );
        GasStationConfig::default()
    };

    config.validate()?;
    Ok(config)
}

/// Load a configuration file into the global CONFIG
///
/// Can only succeed once per process.
pub fn init_config(path: impl AsRef<Path>) -> GasResult<()> {
    let config = load_config_from_path(path)?;

    CONFIG
        .set(RwLock::new(config))
        .map_err(|_| GasError::Config("Config already initialized".to_string()))?;

    logger::debug(LogTag::Config, "Global configuration initialized");
    Ok(())
}

/// Clone of the global configuration, or the defaults if never initialized
pub fn get_config_clone() -> GasStationConfig {
    CONFIG
        .get()
        .map(|lock| lock.read().clone())
        .unwrap_or_default()
}

pub fn is_config_initialized() -> bool {
    CONFIG.get().is_some()
}
