// src/util/log.rs

//! Logger Utility - file-based logging so log output never interleaves with the console menus
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use chrono::Local;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Global logger instance, set once by [`init_logger`]
static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Log severity levels
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn filename(&self) -> &str {
        match self {
            LogLevel::Error => "error.log",
            LogLevel::Warn => "warn.log",
            LogLevel::Info => "info.log",
            LogLevel::Debug => "debug.log",
        }
    }
}

/// Logger that writes to separate files by severity
pub struct Logger {
    log_dir: PathBuf,
    error_file: Mutex<File>,
    warn_file: Mutex<File>,
    info_file: Mutex<File>,
    debug_file: Mutex<File>,
}

impl Logger {
    /// Create a new logger with the specified directory
    pub fn new(log_dir: &Path) -> std::io::Result<Self> {
        DEBUG_ENABLED.get_or_init(|| {
            std::env::var("DEBUG").unwrap_or_default() == "true"
        });

        let log_dir = log_dir.to_path_buf();

        create_dir_all(&log_dir)?;

        // Create/truncate log files (start fresh each time)
        let error_file = File::create(log_dir.join(LogLevel::Error.filename()))?;
        let warn_file = File::create(log_dir.join(LogLevel::Warn.filename()))?;
        let info_file = File::create(log_dir.join(LogLevel::Info.filename()))?;
        let debug_file = File::create(log_dir.join(LogLevel::Debug.filename()))?;

        Ok(Self {
            log_dir,
            error_file: Mutex::new(error_file),
            warn_file: Mutex::new(warn_file),
            info_file: Mutex::new(info_file),
            debug_file: Mutex::new(debug_file),
        })
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Write a log entry to the appropriate file
    fn write_log(&self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}\n", timestamp, level.as_str(), message);

        let file = match level {
            LogLevel::Error => &self.error_file,
            LogLevel::Warn => &self.warn_file,
            LogLevel::Info => &self.info_file,
            LogLevel::Debug => &self.debug_file,
        };

        if let Ok(mut file) = file.lock() {
            let _ = file.write_all(formatted.as_bytes());
            let _ = file.flush();
        }
    }

    /// Log an error message
    pub fn error(&self, message: &str) {
        self.write_log(LogLevel::Error, message);
    }

    /// Log a warning message
    pub fn warn(&self, message: &str) {
        self.write_log(LogLevel::Warn, message);
    }

    /// Log an info message
    pub fn info(&self, message: &str) {
        self.write_log(LogLevel::Info, message);
    }

    /// Log a debug message
    pub fn debug(&self, message: &str) {
        self.write_log(LogLevel::Debug, message);
    }
}

/// Install the global logger. Later calls keep the first logger.
pub fn init_logger(log_dir: &Path) -> std::io::Result<&'static Logger> {
    if let Some(logger) = LOGGER.get() {
        return Ok(logger);
    }
    let logger = Logger::new(log_dir)?;
    Ok(LOGGER.get_or_init(|| logger))
}

/// The global logger, if [`init_logger`] has run. Macros are no-ops until then.
pub fn logger() -> Option<&'static Logger> {
    LOGGER.get()
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::logger() {
            let message = format!($($arg)*);
            logger.error(&message);
        }
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::logger() {
            let message = format!($($arg)*);
            logger.warn(&message);
        }
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::logger() {
            let message = format!($($arg)*);
            logger.info(&message);
        }
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if *$crate::util::log::DEBUG_ENABLED.get().unwrap_or(&false) {
            if let Some(logger) = $crate::util::log::logger() {
                let message = format!($($arg)*);
                logger.debug(&message);
            }
        }
    }};
}
