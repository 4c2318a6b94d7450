//! Core logging implementation with automatic filtering
//!
//! Filtering rules:
//! 1. Errors are always shown
//! 2. Anything above the minimum level threshold is dropped
//! 3. Debug level requires --debug-<tag> (or --debug-all) for that tag
//! 4. If enabled_tags is non-empty, the tag must be in the set
use super::config::{get_logger_config, is_debug_enabled_for_tag, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

pub(crate) fn should_log(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level {
        return false;
    }

    if level == LogLevel::Debug && !is_debug_enabled_for_tag(config, tag) {
        return false;
    }

    if !config.enabled_tags.is_empty() && !config.enabled_tags.contains(&tag.to_debug_key()) {
        return false;
    }

    true
}

pub(crate) fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    let config = get_logger_config();
    if !should_log(&config, &tag, level) {
        return;
    }

    super::format::format_and_log(&tag, level, message, config.use_colors);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_always_pass() {
        let config = LoggerConfig {
            min_level: LogLevel::Error,
            ..LoggerConfig::default()
        };
        assert!(should_log(&config, &LogTag::Cache, LogLevel::Error));
        assert!(!should_log(&config, &LogTag::Cache, LogLevel::Warning));
    }

    #[test]
    fn test_debug_requires_tag_flag() {
        let mut config = LoggerConfig {
            min_level: LogLevel::Debug,
            ..LoggerConfig::default()
        };
        assert!(!should_log(&config, &LogTag::Cache, LogLevel::Debug));

        config.debug_tags.insert("cache".to_string());
        assert!(should_log(&config, &LogTag::Cache, LogLevel::Debug));
        assert!(!should_log(&config, &LogTag::GasOracle, LogLevel::Debug));
        assert!(should_log(&config, &LogTag::GasOracle, LogLevel::Info));
    }

    #[test]
    fn test_enabled_tags_filter() {
        let mut config = LoggerConfig::default();
        config.enabled_tags.insert("gas".to_string());
        assert!(should_log(&config, &LogTag::GasOracle, LogLevel::Info));
        assert!(!should_log(&config, &LogTag::System, LogLevel::Info));
    }
}
