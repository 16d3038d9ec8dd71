#![allow(clippy::unwrap_used, clippy::expect_used)]

use tracegraph_core::errors::TraceGraphError;
use tracegraph_core::logging_facility::test_capture::init_test_capture;
use tracegraph_core::{log_op_end, log_op_error, log_op_start};
use tracegraph_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_EVENT, FIELD_OP,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, root_count = 2);

    let starts = capture.events_for(op_name, EVENT_START);
    assert_eq!(starts.len(), 1, "Should have exactly one start event");
    assert_eq!(starts[0].field("root_count"), Some("2"));
}

#[test]
fn test_log_op_end_macro_records_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, node_count = 5);

    let ends = capture.events_for(op_name, EVENT_END);
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field(FIELD_DURATION_MS), Some("42"));
    assert_eq!(ends[0].field("node_count"), Some("5"));
    assert!(ends[0].component.is_some());
}

#[test]
fn test_log_op_error_macro_records_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";
    let err = TraceGraphError::TraceRecordNotFound {
        index: 9,
        available: 2,
    };

    log_op_error!(op_name, err, duration_ms = 1);

    let errors = capture.events_for(op_name, EVENT_END_ERROR);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(errors[0].field(FIELD_ERR_KIND), Some("NotFound"));
    assert_eq!(errors[0].level, tracing::Level::ERROR);
}

#[test]
fn test_start_end_pairing() {
    let capture = init_test_capture();
    let op_name = "test_pairing_unique_4";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 0);

    capture.assert_event_exists(op_name, EVENT_START);
    capture.assert_event_exists(op_name, EVENT_END);
    let count = capture.count_events(|e| e.op.as_deref() == Some(op_name));
    assert_eq!(count, 2);
}

#[test]
fn test_macro_fields_use_schema_names() {
    let capture = init_test_capture();
    let op_name = "test_schema_names_unique_5";

    log_op_end!(op_name, duration_ms = 7);

    let ends = capture.events_for(op_name, EVENT_END);
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field(FIELD_OP), Some(op_name));
    assert_eq!(ends[0].field(FIELD_EVENT), Some(EVENT_END));
    assert!(ends[0].field(FIELD_COMPONENT).is_some());
}
