//! Log formatting and console output with ANSI colors
//!
//! Broken pipes (e.g. `tool_gas_price | head`) end the process quietly.

use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stdout, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 8;
const LOG_TYPE_WIDTH: usize = 7;

pub(crate) fn format_and_log(tag: &LogTag, level: LogLevel, message: &str, use_colors: bool) {
    let time = Local::now().format("%H:%M:%S").to_string();

    let line = if use_colors {
        format!(
            "{} [{}] [{}] {}",
            time.dimmed(),
            format_tag(tag),
            format_level(level),
            message
        )
    } else {
        format!(
            "{} [{:<tag_width$}] [{:<level_width$}] {}",
            time,
            tag.to_plain_string(),
            level.as_str(),
            message,
            tag_width = TAG_WIDTH,
            level_width = LOG_TYPE_WIDTH
        )
    };

    print_stdout_safe(&line);
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let label = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::GasOracle => label.bright_yellow().bold(),
        LogTag::Cache => label.bright_cyan().bold(),
        LogTag::Config => label.bright_magenta().bold(),
        LogTag::System => label.bright_green().bold(),
        LogTag::Other(_) => label.white().bold(),
    }
}

fn format_level(level: LogLevel) -> ColoredString {
    let label = format!("{:<width$}", level.as_str(), width = LOG_TYPE_WIDTH);
    match level {
        LogLevel::Error => label.bright_red().bold(),
        LogLevel::Warning => label.yellow().bold(),
        LogLevel::Info => label.white().bold(),
        LogLevel::Debug | LogLevel::Verbose => label.dimmed(),
    }
}

/// Print to stdout but ignore broken pipe errors
fn print_stdout_safe(message: &str) {
    if let Err(e) = writeln!(stdout(), "{}", message) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        let _ = writeln!(std::io::stderr(), "Logger stdout error: {}", e);
    }
    if let Err(e) = stdout().flush() {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
}
