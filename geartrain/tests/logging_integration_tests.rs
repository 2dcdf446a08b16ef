//! Integration tests for the logging system
//!
//! These tests verify that loader and solver failures reach a custom
//! logger, and that the severity threshold filters entries.
//!
//! Run with: cargo test --test logging_integration_tests

use geartrain::geartrain::log::{Log, LogEntry, LogSeverity, Logger};
use geartrain::geartrain::{Error, KinematicSolver, Scene, SceneLoader};
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Install a capturing logger at `severity`, run `f`, then restore defaults
fn with_captured_logs<F: FnOnce()>(severity: LogSeverity, f: F) -> Vec<LogEntry> {
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);
    Log::set_min_severity(severity);

    f();

    Log::reset_logger();
    Log::set_min_severity(LogSeverity::Info);

    let captured = entries.lock().unwrap().clone();
    captured
}

const TOO_CLOSE: &str = "
ANAME = AXLE1  AAXIS = 2  APOSITION = 0 0 0  AMOTORED = 1  ADIRECTION = 1  AANGULARVELOCITY = 10
ANAME = AXLE2  AAXIS = 2  APOSITION = 1 0 0
GNAME = GEAR1  GAXLE = AXLE1  GRADIUS = 2  GWIDTH = 0.5  GTEETH = 20  GTOOTHDEPTH = 0.2
GNAME = GEAR2  GAXLE = AXLE2  GRADIUS = 1  GWIDTH = 0.5  GTEETH = 10  GTOOTHDEPTH = 0.1
";

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let entries = with_captured_logs(LogSeverity::Trace, || {
        Log::log(LogSeverity::Info, "test::module", "Test info message".to_string());
        Log::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());
        geartrain::gt_error!("test::module", "Test error {}", 42);
    });

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].severity, LogSeverity::Info);
    assert_eq!(entries[0].source, "test::module");
    assert_eq!(entries[0].message, "Test info message");
    assert_eq!(entries[1].severity, LogSeverity::Warn);
    assert_eq!(entries[2].severity, LogSeverity::Error);
    assert_eq!(entries[2].message, "Test error 42");
    assert!(entries[2].file.is_some());
    assert!(entries[2].line.is_some());
}

#[test]
#[serial]
fn test_integration_severity_filter() {
    let entries = with_captured_logs(LogSeverity::Warn, || {
        geartrain::gt_debug!("test::module", "dropped");
        geartrain::gt_info!("test::module", "dropped too");
        geartrain::gt_warn!("test::module", "kept");
    });

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "kept");
}

#[test]
#[serial]
fn test_integration_solver_error_is_logged() {
    let mut result = None;
    let entries = with_captured_logs(LogSeverity::Error, || {
        let desc = SceneLoader::default().load_str(TOO_CLOSE).unwrap();
        let mut scene = Scene::from_desc(desc).unwrap();
        result = Some(KinematicSolver::default().solve(&mut scene));
    });

    let err = result.unwrap().unwrap_err();
    assert_eq!(err, Error::TooClose { gear1: "GEAR1".to_string(), gear2: "GEAR2".to_string() });

    let logged = entries.iter().find(|entry| entry.source == "geartrain::Solver").unwrap();
    assert_eq!(logged.severity, LogSeverity::Error);
    assert_eq!(logged.message, err.to_string());
}

#[test]
#[serial]
fn test_integration_parse_error_is_logged() {
    let entries = with_captured_logs(LogSeverity::Error, || {
        let result = SceneLoader::default().load_str("GNAME = G\nGTEETH = many");
        assert!(result.is_err());
    });

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].source, "geartrain::Loader");
    assert!(entries[0].message.contains("line 2"));
}

#[test]
#[serial]
fn test_integration_idle_axle_warning() {
    let source = "
ANAME = AXLE1  AAXIS = 2  APOSITION = 0 0 0  AMOTORED = 1  ADIRECTION = 1  AANGULARVELOCITY = 10
ANAME = SPARE  AAXIS = 2  APOSITION = 40 0 0
";
    let entries = with_captured_logs(LogSeverity::Warn, || {
        let desc = SceneLoader::default().load_str(source).unwrap();
        let mut scene = Scene::from_desc(desc).unwrap();
        KinematicSolver::default().solve(&mut scene).unwrap();
    });

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, LogSeverity::Warn);
    assert!(entries[0].message.contains("SPARE"));
}
