//! Capture mode for deterministic logging assertions
//!
//! Installs a sink that collects records in memory so tests can assert
//! on exactly what the contextual logger emitted, fields included.

use std::sync::{Arc, Mutex, OnceLock};

use serde_json::Value;

use crate::sink::{install_sink, LogSink};

/// Severity of a captured record; the sink contract knows two levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Error,
}

/// A captured log record with all its fields
#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub severity: Severity,
    pub message: String,
    pub fields: Vec<(String, Value)>,
}

impl CapturedRecord {
    /// First value recorded under `key`, if any
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Whether any field was recorded under `key`
    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }
}

/// Capture sink collecting records for test assertions
pub struct CaptureSink {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl CaptureSink {
    pub fn new() -> (Self, LogCapture) {
        let records = Arc::new(Mutex::new(Vec::new()));
        let sink = Self {
            records: records.clone(),
        };
        let capture = LogCapture { records };
        (sink, capture)
    }

    fn push(&self, severity: Severity, message: &str, fields: &[(String, Value)]) {
        let record = CapturedRecord {
            severity,
            message: message.to_string(),
            fields: fields.to_vec(),
        };
        self.records
            .lock()
            .map(|mut records| records.push(record))
            .ok();
    }
}

impl LogSink for CaptureSink {
    fn debug(&self, message: &str, fields: &[(String, Value)]) {
        self.push(Severity::Debug, message, fields);
    }

    fn error(&self, message: &str, fields: &[(String, Value)]) {
        self.push(Severity::Error, message, fields);
    }
}

/// Handle for accessing captured records in tests
#[derive(Clone)]
pub struct LogCapture {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl LogCapture {
    /// Get all captured records
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Clear all captured records
    pub fn clear(&self) {
        self.records.lock().map(|mut r| r.clear()).ok();
    }

    /// Count records matching a predicate
    pub fn count_records<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedRecord) -> bool,
    {
        self.records().iter().filter(|r| predicate(r)).count()
    }

    /// First record carrying the given message, if any
    pub fn find_record(&self, message: &str) -> Option<CapturedRecord> {
        self.records().into_iter().find(|r| r.message == message)
    }

    /// Assert that a record exists with the given severity and message
    ///
    /// # Panics
    ///
    /// Panics if the record is not found
    pub fn assert_record_exists(&self, severity: Severity, message: &str) {
        let records = self.records();
        let found = records
            .iter()
            .any(|r| r.severity == severity && r.message == message);
        assert!(
            found,
            "Expected record severity={:?} message={} not found in {} captured records",
            severity,
            message,
            records.len()
        );
    }
}

static GLOBAL_CAPTURE: OnceLock<LogCapture> = OnceLock::new();

/// Initialize capture mode
///
/// Installs the capture sink as the process-wide sink (first
/// installation wins, so call this before anything logs) and returns a
/// shared handle. Tests in one binary share the handle; use unique
/// messages per test when filtering.
pub fn init_log_capture() -> LogCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (sink, capture) = CaptureSink::new();
            install_sink(Box::new(sink));
            capture
        })
        .clone()
}
