#![deny(missing_docs)]
//! Shared logging utilities for the serpwatch workspace.
//!
//! This crate provides the `watch_*` logging macros used across the codebase,
//! the logger setup used by the terminal front end, and a logger for tests
//! that writes through the test harness.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    TestLogger, WriteLogger,
};

#[doc(hidden)]
pub use log as __log;

/// Default log file written by the front end, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "./serpwatch.log";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! watch_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! watch_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! watch_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! watch_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! watch_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to the given file only.
    File(PathBuf),
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// Write to both the given file and the terminal.
    Both(PathBuf),
}

impl Default for LogDestination {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_LOG_FILE))
    }
}

/// Initialize the global logger with the specified destination.
///
/// A file that cannot be created is reported on stderr and skipped; the call
/// never fails, and a second initialization is silently ignored.
pub fn initialize(destination: LogDestination) {
    let config = front_end_config();

    let (path, terminal) = match destination {
        LogDestination::File(path) => (Some(path), false),
        LogDestination::Terminal => (None, true),
        LogDestination::Both(path) => (Some(path), true),
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if terminal {
        loggers.push(TermLogger::new(
            FRONT_END_LEVEL,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if let Some(path) = path {
        if let Some(file_logger) = open_log_file(&path, config) {
            loggers.push(file_logger);
        }
    }
    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}

const FRONT_END_LEVEL: LevelFilter = LevelFilter::Info;

fn front_end_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn open_log_file(path: &Path, config: Config) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(FRONT_END_LEVEL, config, file)),
        Err(err) => {
            eprintln!("Warning: log file {} not created: {}", path.display(), err);
            None
        }
    }
}

/// Routes log output through the test harness so it only shows for failing
/// tests.
///
/// Every test binary may call this from each test; only the first call
/// installs the logger.
pub fn initialize_for_tests() {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    let _ = TestLogger::init(LevelFilter::Debug, config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_destination_is_log_file() {
        assert_eq!(
            LogDestination::default(),
            LogDestination::File(PathBuf::from(DEFAULT_LOG_FILE))
        );
    }

    #[test]
    fn test_logger_accepts_debug_and_survives_reinitialization() {
        initialize_for_tests();
        initialize_for_tests();

        assert!(__log::log_enabled!(__log::Level::Debug));
        assert!(!__log::log_enabled!(__log::Level::Trace));
        watch_debug!("logger initialized twice");
    }
}
