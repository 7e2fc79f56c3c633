//! Contextual logging behavior with debug mode disabled
//!
//! The debug flag is frozen per process, so every test in this binary
//! runs in production mode; development-mode behavior lives in its own
//! test binary.

use serde_json::json;
use tracery_core_types::ExecutionContext;
use tracery_logging::{
    assert_or_log, init_debug_mode, init_log_capture, log_debug, log_error, LogCapture, Severity,
};

fn setup() -> LogCapture {
    let capture = init_log_capture();
    init_debug_mode(false);
    capture
}

#[test]
fn test_log_error_emits_context_location_regardless_of_call_site() {
    let capture = setup();
    let message = "prod_error_context_location_unique_1";

    let derivation_line = line!() + 1;
    let ctx = ExecutionContext::new().with_caller_location();
    log_error(&ctx, message, &[]);

    let record = capture.find_record(message).expect("record captured");
    assert_eq!(record.severity, Severity::Error);
    assert_eq!(record.field("file"), Some(&json!(file!())));
    assert_eq!(record.field("line"), Some(&json!(derivation_line)));
}

#[test]
fn test_log_error_without_location_omits_file_and_line() {
    let capture = setup();
    let message = "prod_error_no_location_unique_2";

    log_error(&ExecutionContext::new(), message, &[]);

    let record = capture.find_record(message).expect("record captured");
    assert!(!record.has_field("file"));
    assert!(!record.has_field("line"));
}

#[test]
fn test_log_debug_forwards_but_skips_caller_capture() {
    let capture = setup();
    let message = "prod_debug_forwarded_unique_3";

    log_debug(&ExecutionContext::new(), message, &[("step", json!("parse"))]);

    // Forwarding is not gated; the sink owns level filtering
    let record = capture.find_record(message).expect("record captured");
    assert_eq!(record.severity, Severity::Debug);
    assert_eq!(record.field("step"), Some(&json!("parse")));
    assert!(!record.has_field("file"));
    assert!(!record.has_field("line"));
}

#[test]
fn test_context_metadata_overlay_reaches_the_record() {
    let capture = setup();
    let message = "prod_metadata_overlay_unique_4";

    let parent = ExecutionContext::new().with_metadata(&[
        json!("tenant"),
        json!("acme"),
        json!("region"),
        json!("eu"),
    ]);
    let child = parent.with_metadata(&[json!("region"), json!("us")]);

    log_error(&child, message, &[("op", json!("flush"))]);

    let record = capture.find_record(message).expect("record captured");
    assert_eq!(record.field("tenant"), Some(&json!("acme")));
    assert_eq!(record.field("region"), Some(&json!("us")));
    // Caller-supplied fields lead the record
    assert_eq!(record.fields[0], ("op".to_string(), json!("flush")));
}

#[test]
fn test_parent_context_logs_unchanged_after_derivation() {
    let capture = setup();
    let message = "prod_parent_unchanged_unique_5";

    let parent = ExecutionContext::new().with_metadata(&[json!("region"), json!("eu")]);
    let _child = parent.with_metadata(&[json!("region"), json!("us")]);

    log_error(&parent, message, &[]);

    let record = capture.find_record(message).expect("record captured");
    assert_eq!(record.field("region"), Some(&json!("eu")));
}

#[test]
fn test_odd_length_derivation_logs_like_its_parent() {
    let capture = setup();
    let message = "prod_odd_length_unique_6";

    let ctx = ExecutionContext::new().with_metadata(&[json!("a"), json!(1)]);
    let same = ctx.with_metadata(&[json!("dangling")]);

    log_error(&same, message, &[]);

    let record = capture.find_record(message).expect("record captured");
    assert_eq!(record.field("a"), Some(&json!(1)));
    assert!(!record.has_field("dangling"));
}

#[test]
fn test_failed_assert_degrades_to_error_record() {
    let capture = setup();

    // Must not panic in production mode
    assert_or_log(false, "prod_assert_invariant_unique_7");

    let matches = capture.count_records(|r| {
        r.severity == Severity::Error
            && r.message == "Assert failed"
            && r.field("message") == Some(&json!("prod_assert_invariant_unique_7"))
    });
    assert_eq!(matches, 1);
}

#[test]
fn test_passing_assert_emits_nothing() {
    let capture = setup();

    assert_or_log(true, "prod_assert_passing_unique_8");

    let matches = capture
        .count_records(|r| r.field("message") == Some(&json!("prod_assert_passing_unique_8")));
    assert_eq!(matches, 0);
}
