//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the global threshold.

use crate::log::{DefaultLogger, Log, LogEntry, LogSeverity, Logger};
use serial_test::serial;
use std::time::SystemTime;

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_from_name() {
    assert_eq!(LogSeverity::from_name("trace"), Some(LogSeverity::Trace));
    assert_eq!(LogSeverity::from_name("DEBUG"), Some(LogSeverity::Debug));
    assert_eq!(LogSeverity::from_name("Info"), Some(LogSeverity::Info));
    assert_eq!(LogSeverity::from_name("warning"), Some(LogSeverity::Warn));
    assert_eq!(LogSeverity::from_name("error"), Some(LogSeverity::Error));
    assert_eq!(LogSeverity::from_name("loud"), None);
}

#[test]
fn test_log_severity_u8_roundtrip_covers_all_levels() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(LogSeverity::from_u8(severity.to_u8()), severity);
    }
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_with_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "geartrain::Solver".to_string(),
        message: "Error in tooth linkage".to_string(),
        file: Some("solver.rs"),
        line: Some(42),
    };

    assert_eq!(entry.severity, LogSeverity::Error);
    assert_eq!(entry.source, "geartrain::Solver");
    assert_eq!(entry.file, Some("solver.rs"));
    assert_eq!(entry.line, Some(42));
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger;
    for severity in [LogSeverity::Trace, LogSeverity::Info, LogSeverity::Error] {
        logger.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: "test".to_string(),
            message: "message".to_string(),
            file: Some("test.rs"),
            line: Some(1),
        });
    }
}

// ============================================================================
// THRESHOLD TESTS
// ============================================================================

#[test]
#[serial]
fn test_min_severity_enabled() {
    let previous = Log::min_severity();

    Log::set_min_severity(LogSeverity::Warn);
    assert!(!Log::enabled(LogSeverity::Info));
    assert!(Log::enabled(LogSeverity::Warn));
    assert!(Log::enabled(LogSeverity::Error));

    Log::set_min_severity(LogSeverity::Trace);
    assert!(Log::enabled(LogSeverity::Trace));

    Log::set_min_severity(previous);
}
