use serde_json::json;
use tracegraph_core::trace::TraceRecord;
use tracegraph_core::TreeNode;

/// Forest `[A[B, C[D, E]]]`
#[allow(dead_code)]
pub fn scenario_a() -> Vec<TreeNode> {
    vec![TreeNode::new("A", "A").with_children([
        TreeNode::new("B", "B"),
        TreeNode::new("C", "C").with_children([TreeNode::new("D", "D"), TreeNode::new("E", "E")]),
    ])]
}

/// Trace record whose request carries one user message per text
#[allow(dead_code)]
pub fn record(id: &str, texts: &[&str]) -> TraceRecord {
    let messages: Vec<_> = texts
        .iter()
        .map(|text| json!({"role": "user", "content": text}))
        .collect();
    serde_json::from_value(json!({
        "id": id,
        "timestamp": "2026-03-01T10:00:00Z",
        "request": {"model": "test-model", "messages": messages},
    }))
    .unwrap()
}
