//! Unit tests for the Engine logging hub
//!
//! IMPORTANT: the logger slot is a global OnceLock shared across all tests.
//! All tests are marked with #[serial] to run sequentially.

use crate::cull3d::Engine;
use crate::cull3d::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

const SOURCE: &str = "cull3d::engine_tests";

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
        // Other (non-serial) tests may log concurrently; keep only ours.
        if entry.source == SOURCE {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

// ============================================================================
// LOGGER REGISTRATION
// ============================================================================

#[test]
#[serial]
fn test_default_logger_logs_without_panic() {
    Engine::reset_logger();
    Engine::log(LogSeverity::Info, SOURCE, "default logger".to_string());
}

#[test]
#[serial]
fn test_custom_logger_receives_logs() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log(LogSeverity::Info, SOURCE, "hello".to_string());
    crate::engine_warn!(SOURCE, "{} planes", 6);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].message, "hello");
        assert_eq!(captured[1].severity, LogSeverity::Warn);
        assert_eq!(captured[1].message, "6 planes");
        assert!(captured[1].file.is_none());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_with_file_line() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    crate::engine_error!(SOURCE, "broken {}", "matrix");

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert_eq!(captured[0].message, "broken matrix");
        assert!(captured[0].file.unwrap().ends_with("engine_tests.rs"));
        assert!(captured[0].line.is_some());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_detaches_custom_logger() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::reset_logger();

    Engine::log(LogSeverity::Info, SOURCE, "after reset".to_string());

    assert!(entries.lock().unwrap().is_empty());
}

// ============================================================================
// SEVERITY THRESHOLD
// ============================================================================

#[test]
#[serial]
fn test_min_severity_filters_entries() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::set_min_severity(LogSeverity::Warn);
    assert_eq!(Engine::min_severity(), LogSeverity::Warn);

    crate::engine_trace!(SOURCE, "dropped");
    crate::engine_info!(SOURCE, "dropped");
    crate::engine_warn!(SOURCE, "kept");
    crate::engine_error!(SOURCE, "kept");

    assert_eq!(entries.lock().unwrap().len(), 2);

    Engine::reset_logger();
    assert_eq!(Engine::min_severity(), LogSeverity::Trace);
}

#[test]
#[serial]
fn test_engine_err_macro_logs_error() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let _ = crate::engine_err!(SOURCE, BackendError, "draw failed");

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].message, "draw failed");
    }

    Engine::reset_logger();
}
