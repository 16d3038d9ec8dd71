use crate::errors::{Result, TraceGraphError};
use crate::model::TreeNode;
use std::collections::HashSet;

/// Validate a forest before layout
///
/// The layout engine assumes unique, non-empty ids and does not check them.
/// This walks the forest in pre-order and reports the first violation.
///
/// # Errors
/// * `EmptyNodeId` - A node has an empty id
/// * `DuplicateNodeId` - An id appears more than once anywhere in the forest
pub fn validate_forest(forest: &[TreeNode]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(&TreeNode, Option<&str>)> =
        forest.iter().rev().map(|root| (root, None)).collect();

    while let Some((node, parent_id)) = stack.pop() {
        if node.id.is_empty() {
            return Err(TraceGraphError::EmptyNodeId {
                parent_id: parent_id.map(str::to_string),
            });
        }
        if !seen.insert(node.id.as_str()) {
            return Err(TraceGraphError::DuplicateNodeId {
                node_id: node.id.clone(),
            });
        }
        stack.extend(
            node.children
                .iter()
                .rev()
                .map(move |child| (child, Some(node.id.as_str()))),
        );
    }

    Ok(())
}

/// Count leaves across the forest
///
/// A valid layout uses exactly this many columns.
pub fn leaf_count(forest: &[TreeNode]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&TreeNode> = forest.iter().collect();
    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            count += 1;
        } else {
            stack.extend(node.children.iter());
        }
    }
    count
}

/// Count every node across the forest
pub fn node_count(forest: &[TreeNode]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&TreeNode> = forest.iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.children.iter());
    }
    count
}
