//! Sink seam between the contextual logger and whatever emits records
//!
//! The logger never formats or writes output itself; it hands
//! `(message, fields)` records to the process-wide [`LogSink`]. How a
//! record is rendered, whether its level passes, and where it ends up
//! are all the sink's decisions.

use std::sync::OnceLock;

use serde_json::Value;

/// Destination for assembled log records
///
/// Implementations must be thread-safe; the logger performs no locking
/// of its own around forwarding.
pub trait LogSink: Send + Sync {
    /// Emit a debug-severity record
    fn debug(&self, message: &str, fields: &[(String, Value)]);

    /// Emit an error-severity record
    fn error(&self, message: &str, fields: &[(String, Value)]);
}

/// Default sink forwarding records into the `tracing` ecosystem
///
/// Fields are rendered as a single JSON object attribute, leaving layout
/// and level filtering to the installed subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&self, message: &str, fields: &[(String, Value)]) {
        tracing::debug!(target: "tracery", fields = %render_fields(fields), "{}", message);
    }

    fn error(&self, message: &str, fields: &[(String, Value)]) {
        tracing::error!(target: "tracery", fields = %render_fields(fields), "{}", message);
    }
}

fn render_fields(fields: &[(String, Value)]) -> String {
    let mut object = serde_json::Map::new();
    for (key, value) in fields {
        object.insert(key.clone(), value.clone());
    }
    Value::Object(object).to_string()
}

static SINK: OnceLock<Box<dyn LogSink>> = OnceLock::new();

/// Install the process-wide sink
///
/// The first installation wins and the sink stays for the process
/// lifetime. Returns `false` when a sink (possibly the default) was
/// already in place.
pub fn install_sink(sink: Box<dyn LogSink>) -> bool {
    SINK.set(sink).is_ok()
}

/// The installed sink, defaulting to [`TracingSink`] on first use
pub(crate) fn sink() -> &'static dyn LogSink {
    SINK.get_or_init(|| Box::new(TracingSink)).as_ref()
}
