//! Context-aware log entry points
//!
//! Both entry points append the merged metadata of the supplied
//! [`ExecutionContext`] to the caller's fields before forwarding to the
//! sink, so request-scoped annotations surface on every record without
//! each call site repeating them.
//!
//! Caller-location handling differs by severity. Debug records always
//! want their own immediate call site, so `log_debug` captures it fresh
//! (when debug mode permits). Error contexts are frequently constructed
//! far from the point of failure, at request ingress for example, so
//! `log_error` prefers a location recorded on the context over its own
//! call site and only falls back to a fresh capture in debug mode.

use std::panic::Location;

use serde_json::Value;
use tracery_core_types::schema::{FIELD_FILE, FIELD_LINE};
use tracery_core_types::ExecutionContext;

use crate::debug_mode::is_debug_enabled;
use crate::sink::sink;

/// Emit a debug-severity record carrying the context's metadata
///
/// In debug mode the immediate caller's `file`/`line` are appended.
/// The record is always forwarded; level suppression is the sink's job,
/// only the capture step is gated.
#[track_caller]
pub fn log_debug(ctx: &ExecutionContext, message: &str, fields: &[(&str, Value)]) {
    let mut record = own_fields(fields);

    if is_debug_enabled() {
        let location = Location::caller();
        record.push((FIELD_FILE.to_string(), Value::from(location.file())));
        record.push((FIELD_LINE.to_string(), Value::from(location.line())));
    }

    append_context_metadata(ctx, &mut record);
    sink().debug(message, &record);
}

/// Emit an error-severity record carrying the context's metadata
///
/// A caller location recorded on the context takes priority over a fresh
/// capture; the fresh capture happens only in debug mode. A non-empty
/// file appends as `file`, a non-zero line as `line`.
#[track_caller]
pub fn log_error(ctx: &ExecutionContext, message: &str, fields: &[(&str, Value)]) {
    let mut record = own_fields(fields);

    let mut file = String::new();
    let mut line = 0u32;
    if is_debug_enabled() {
        let location = Location::caller();
        file = location.file().to_string();
        line = location.line();
    }
    if let Some(recorded) = ctx.caller_location() {
        file = recorded.file.clone();
        line = recorded.line;
    }

    if !file.is_empty() {
        record.push((FIELD_FILE.to_string(), Value::from(file)));
    }
    if line != 0 {
        record.push((FIELD_LINE.to_string(), Value::from(line)));
    }

    append_context_metadata(ctx, &mut record);
    sink().error(message, &record);
}

fn own_fields(fields: &[(&str, Value)]) -> Vec<(String, Value)> {
    fields
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

fn append_context_metadata(ctx: &ExecutionContext, record: &mut Vec<(String, Value)>) {
    for (key, value) in ctx.merged_metadata() {
        record.push((key, value));
    }
}
