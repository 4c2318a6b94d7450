//! Structured, tagged logging for the gas price client
//!
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-tag debug control via --debug-<tag> flags
//! - Colored console output
//!
//! ## Usage
//!
//! ```rust
//! use gasstation::logger::{self, LogTag};
//!
//! logger::info(LogTag::GasOracle, "Fetched fresh gas prices");
//! logger::debug(LogTag::Cache, "Cache hit for fast"); // Only if --debug-cache
//! ```
//!
//! Call [`init`] once at startup to pick up flags from the command line.
//! Without it the logger runs with [`LoggerConfig::default`].

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, init_from_args, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger from command-line arguments
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (shown unless --quiet is used)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when the --debug-<tag> flag for this tag is present.
///
/// # Example
/// ```rust
/// use gasstation::logger::{self, LogTag};
///
/// // Only shown with --debug-gas
/// logger::debug(LogTag::GasOracle, "Request url: ...");
/// ```
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (raw payloads, only with --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
