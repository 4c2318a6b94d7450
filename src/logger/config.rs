//! Logger configuration and command-line flag parsing
//!
//! Recognized flags:
//! - `--debug-<tag>` enables debug output for one tag (e.g. `--debug-cache`)
//! - `--debug-all` enables debug output for every tag
//! - `--verbose` lowers the threshold to Verbose
//! - `--quiet` raises the threshold to Error
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Messages above this level are dropped
    pub min_level: LogLevel,

    /// Tags with debug output enabled
    pub debug_tags: HashSet<String>,

    pub debug_all: bool,

    /// When non-empty, only these tags are shown (errors always pass)
    pub enabled_tags: HashSet<String>,

    pub use_colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            debug_all: false,
            enabled_tags: HashSet::new(),
            use_colors: true,
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG.read().clone()
}

pub fn set_logger_config(config: LoggerConfig) {
    *LOGGER_CONFIG.write() = config;
}

/// Build a config from the process arguments and install it
pub fn init_from_args() {
    let args: Vec<String> = std::env::args().collect();
    set_logger_config(config_from_args(&args));
}

pub(crate) fn config_from_args(args: &[String]) -> LoggerConfig {
    let mut config = LoggerConfig::default();

    for arg in args {
        match arg.as_str() {
            "--verbose" => config.min_level = LogLevel::Verbose,
            "--quiet" => config.min_level = LogLevel::Error,
            "--debug-all" => config.debug_all = true,
            "--no-color" => config.use_colors = false,
            other => {
                if let Some(tag) = other.strip_prefix("--debug-") {
                    config.debug_tags.insert(tag.to_lowercase());
                }
            }
        }
    }

    // Debug flags imply the Debug threshold unless --verbose already went further
    if (config.debug_all || !config.debug_tags.is_empty()) && config.min_level < LogLevel::Debug {
        config.min_level = LogLevel::Debug;
    }

    config
}

pub(crate) fn is_debug_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.debug_all || config.debug_tags.contains(&tag.to_debug_key())
}
