//! Logging system for GearTrain
//!
//! This module provides a small pluggable logging layer:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error) with a global threshold
//! - Colored console output by default
//! - Thread-safe logger slot with RwLock
//! - File and line information for ERROR logs raised through `gt_err!`

use colored::*;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// # Example
///
/// ```no_run
/// use geartrain::geartrain::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "geartrain::Solver", "geartrain::Loader")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-pair propagation details
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (with file:line details)
    Error,
}

impl LogSeverity {
    /// Parse a severity name as accepted on the command line
    /// (`trace`, `debug`, `info`, `warn`, `error`, case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "trace" => Some(LogSeverity::Trace),
            "debug" => Some(LogSeverity::Debug),
            "info" => Some(LogSeverity::Info),
            "warn" | "warning" => Some(LogSeverity::Warn),
            "error" => Some(LogSeverity::Error),
            _ => None,
        }
    }

    fn to_u8(self) -> u8 {
        self as u8
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== GLOBAL LOGGER =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped before reaching the logger
static MIN_SEVERITY: AtomicU8 = AtomicU8::new(2); // Info

/// Access point for the process-wide logger
///
/// The logger is the only global state in the crate; scenes, solvers
/// and updaters are always passed explicitly.
pub struct Log;

impl Log {
    fn logger() -> &'static RwLock<Box<dyn Logger>> {
        LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
    }

    /// Replace the default logger with a custom implementation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use geartrain::geartrain::log::{Log, Logger, LogEntry};
    ///
    /// struct Silent;
    /// impl Logger for Silent {
    ///     fn log(&self, _entry: &LogEntry) {}
    /// }
    ///
    /// Log::set_logger(Silent);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Set the lowest severity that reaches the logger
    pub fn set_min_severity(severity: LogSeverity) {
        MIN_SEVERITY.store(severity.to_u8(), Ordering::Relaxed);
    }

    /// Current severity threshold
    pub fn min_severity() -> LogSeverity {
        LogSeverity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
    }

    /// Whether an entry of this severity would be emitted
    pub fn enabled(severity: LogSeverity) -> bool {
        severity >= Self::min_severity()
    }

    /// Log a message without file:line
    ///
    /// Used by macros like gt_info!, gt_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::emit(severity, source, message, None, None);
    }

    /// Log a message with file:line information
    ///
    /// Used by gt_error! and gt_err! to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::emit(severity, source, message, Some(file), Some(line));
    }

    fn emit(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if !Self::enabled(severity) {
            return;
        }
        if let Ok(lock) = Self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose)
#[macro_export]
macro_rules! gt_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::Log::log(
            $crate::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
///
/// # Example
///
/// ```no_run
/// geartrain::gt_debug!("geartrain::Solver", "pass {} changed {} axles", 1, 2);
/// ```
#[macro_export]
macro_rules! gt_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::Log::log(
            $crate::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! gt_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::Log::log(
            $crate::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! gt_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::Log::log(
            $crate::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! gt_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::Log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an [`Error`](crate::Error) with file:line and evaluate to it
///
/// # Example
///
/// ```ignore
/// return Err(gt_err!("geartrain::Solver", Error::NotConverged { passes }));
/// ```
#[macro_export]
macro_rules! gt_err {
    ($source:expr, $err:expr) => {{
        let err: $crate::Error = $err;
        $crate::log::Log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            err.to_string(),
            file!(),
            line!()
        );
        err
    }};
}

/// Log an [`Error`](crate::Error) and return it from the enclosing function
#[macro_export]
macro_rules! gt_bail {
    ($source:expr, $err:expr) => {
        return Err($crate::gt_err!($source, $err))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
