mod common;

use common::scenario_a;
use tracegraph_core::errors::ExErrorKind;
use tracegraph_core::logging_facility::test_capture::init_test_capture;
use tracegraph_core::{LayoutMetrics, TreeNode};
use tracegraph_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, FIELD_COLUMN_COUNT, FIELD_CURVE_COUNT, FIELD_ERR_CODE,
    FIELD_NODE_COUNT, OP_LAYOUT_FOREST,
};
use tracegraph_engine::layout_forest;

#[test]
fn test_layout_forest_returns_full_layout() {
    let layout = layout_forest(&scenario_a(), &LayoutMetrics::default()).unwrap();

    assert_eq!(layout.nodes.len(), 5);
    assert_eq!(layout.column_count(), 3);
    assert_eq!(layout.connectors.curves.len(), 2);
    assert_eq!(layout.width, 88.0);
}

#[test]
fn test_layout_forest_rejects_duplicate_ids() {
    let forest = vec![TreeNode::new("x", "X").with_children([TreeNode::new("x", "again")])];

    let err = layout_forest(&forest, &LayoutMetrics::default()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::DuplicateId);
    assert_eq!(err.entity_id(), Some("x"));
    assert_eq!(err.op(), Some(OP_LAYOUT_FOREST));
}

#[test]
fn test_layout_forest_rejects_bad_metrics() {
    let metrics = LayoutMetrics {
        row_height: 0.0,
        ..LayoutMetrics::default()
    };

    let err = layout_forest(&scenario_a(), &metrics).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert!(err.message().contains("row_height"));
}

#[test]
fn test_layout_forest_logs_counts() {
    let capture = init_test_capture();
    let forest = vec![TreeNode::new("log-root-unique", "R")
        .with_children([TreeNode::new("log-a", "A"), TreeNode::new("log-b", "B")])];

    layout_forest(&forest, &LayoutMetrics::default()).unwrap();

    // Other tests share the capture buffer; match on this forest's shape
    let ends = capture.events_for(OP_LAYOUT_FOREST, EVENT_END);
    assert!(ends.iter().any(|e| {
        e.field(FIELD_NODE_COUNT) == Some("3")
            && e.field(FIELD_COLUMN_COUNT) == Some("2")
            && e.field(FIELD_CURVE_COUNT) == Some("1")
    }));
}

#[test]
fn test_layout_forest_logs_error_code() {
    let capture = init_test_capture();
    let forest = vec![TreeNode::new("", "blank")];

    layout_forest(&forest, &LayoutMetrics::default()).unwrap_err();

    let errors = capture.events_for(OP_LAYOUT_FOREST, EVENT_END_ERROR);
    assert!(errors
        .iter()
        .any(|e| e.field(FIELD_ERR_CODE) == Some("ERR_INVALID_INPUT")));
}
