//! Mode-dependent assertion helper
//!
//! Assertions are a development aid that must never crash a production
//! process: with debug mode enabled a failed condition panics at the
//! caller's location, with debug mode disabled it degrades to an
//! error-level log record and execution continues.

use serde_json::Value;
use tracery_core_types::schema::FIELD_MESSAGE;
use tracery_core_types::ExecutionContext;

use crate::contextual::log_error;
use crate::debug_mode::is_debug_enabled;

/// Check a programmer invariant
///
/// Pass an empty `message` when there is nothing to add beyond the
/// condition itself.
///
/// # Example
///
/// ```
/// use tracery_logging::{assert_or_log, init_debug_mode};
///
/// init_debug_mode(false);
/// // Production mode: logged, never a crash
/// assert_or_log(1 + 1 == 2, "arithmetic holds");
/// assert_or_log(false, "queue drained before shutdown");
/// ```
#[track_caller]
pub fn assert_or_log(condition: bool, message: &str) {
    if condition {
        return;
    }

    if is_debug_enabled() {
        if message.is_empty() {
            panic!("assertion failed");
        }
        panic!("assertion failed: {message}");
    }

    let fields: Vec<(&str, Value)> = if message.is_empty() {
        Vec::new()
    } else {
        vec![(FIELD_MESSAGE, Value::from(message))]
    };
    log_error(&ExecutionContext::new(), "Assert failed", &fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_condition_is_a_no_op() {
        // Must not read the debug flag or touch the sink
        assert_or_log(true, "never evaluated");
        assert_or_log(true, "");
    }
}
