use serde_json::json;
use tracegraph_core::{Message, MessageCatalog, TreeNode};

/// Forest `[A[B, C[D, E]]]`
#[allow(dead_code)]
pub fn scenario_a() -> Vec<TreeNode> {
    vec![TreeNode::new("A", "A").with_children([
        TreeNode::new("B", "B"),
        TreeNode::new("C", "C").with_children([TreeNode::new("D", "D"), TreeNode::new("E", "E")]),
    ])]
}

/// Single root with `depth` descendants, each the only child of the previous
#[allow(dead_code)]
pub fn chain(depth: usize) -> Vec<TreeNode> {
    let mut node = TreeNode::new(format!("n{}", depth), format!("N{}", depth));
    for i in (0..depth).rev() {
        node = TreeNode::new(format!("n{}", i), format!("N{}", i)).with_children([node]);
    }
    vec![node]
}

/// One root with `width` leaf children
#[allow(dead_code)]
pub fn fan(width: usize) -> Vec<TreeNode> {
    let children = (0..width).map(|i| TreeNode::new(format!("c{}", i), format!("C{}", i)));
    vec![TreeNode::new("root", "Root").with_children(children)]
}

/// Column of the row with the given id
#[allow(dead_code)]
pub fn column_of(flat: &[tracegraph_core::FlatNode], id: &str) -> usize {
    flat.iter()
        .find(|n| n.id == id)
        .map(|n| n.column)
        .unwrap_or_else(|| panic!("node {} not in layout", id))
}

/// Catalog holding one user message per text, returned with their ids
#[allow(dead_code)]
pub fn catalog_with(texts: &[&str]) -> (MessageCatalog, Vec<String>) {
    let mut catalog = MessageCatalog::new();
    let ids = texts
        .iter()
        .map(|text| catalog.intern(&json!({"role": "user", "content": text})))
        .collect();
    (catalog, ids)
}

#[allow(dead_code)]
pub fn user_message(id: &str, text: &str) -> Message {
    Message::new(id, "user", json!(text))
}
