mod common;

use common::{chain, fan, scenario_a};
use tracegraph_core::errors::{ExError, ExErrorKind};
use tracegraph_core::rules::validation::{leaf_count, node_count, validate_forest};
use tracegraph_core::{TraceGraphError, TreeNode};

#[test]
fn test_valid_forest_passes() {
    assert!(validate_forest(&scenario_a()).is_ok());
    assert!(validate_forest(&[]).is_ok());
}

#[test]
fn test_duplicate_across_roots_rejected() {
    let forest = vec![
        TreeNode::new("x", "X").with_children([TreeNode::new("shared", "S")]),
        TreeNode::new("shared", "S again"),
    ];

    let result = validate_forest(&forest);
    assert!(matches!(
        result,
        Err(TraceGraphError::DuplicateNodeId { ref node_id }) if node_id == "shared"
    ));

    let ex: ExError = result.unwrap_err().into();
    assert_eq!(ex.kind(), ExErrorKind::DuplicateId);
    assert_eq!(ex.code(), "ERR_DUPLICATE_ID");
}

#[test]
fn test_empty_child_id_reports_parent() {
    let forest = vec![TreeNode::new("p", "P").with_children([TreeNode::new("", "blank")])];

    assert_eq!(
        validate_forest(&forest),
        Err(TraceGraphError::EmptyNodeId {
            parent_id: Some("p".to_string())
        })
    );
}

#[test]
fn test_counts() {
    assert_eq!(node_count(&scenario_a()), 5);
    assert_eq!(leaf_count(&scenario_a()), 3);
    assert_eq!(leaf_count(&fan(7)), 7);
    assert_eq!(leaf_count(&[]), 0);
}

#[test]
fn test_counts_on_deep_chain() {
    let forest = chain(20_000);
    assert_eq!(node_count(&forest), 20_001);
    assert_eq!(leaf_count(&forest), 1);
    assert!(validate_forest(&forest).is_ok());
}
