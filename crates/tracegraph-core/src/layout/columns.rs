use crate::model::{FlatNode, TreeNode};

/// Pending visit on the traversal stack
struct Visit<'a> {
    node: &'a TreeNode,
    parent_id: Option<&'a str>,
    /// Position among the parent's children (or among the roots)
    sibling_index: usize,
    /// Column the node takes if it continues its parent's lane
    inherited_column: usize,
}

/// Flatten a forest into rows and assign each row a lane
///
/// Follows the git-log convention:
/// - the first root takes column 0
/// - a first child stays in its parent's column
/// - every other child, and every root after the first, takes the next
///   unused column and is flagged as a new branch
///
/// Rows come out in pre-order with children in their given order, so a
/// node always precedes its descendants. The number of distinct columns
/// equals the number of leaves.
///
/// The walk uses an explicit stack, so deep trees cannot overflow the call
/// stack. Columns are allocated at visit time, which matches the numbering a
/// recursive depth-first walk would produce.
pub fn assign_columns(forest: &[TreeNode]) -> Vec<FlatNode> {
    let mut out = Vec::new();
    // Column 0 belongs to the first root
    let mut next_column = 1;

    let mut stack: Vec<Visit<'_>> = forest
        .iter()
        .enumerate()
        .rev()
        .map(|(index, root)| Visit {
            node: root,
            parent_id: None,
            sibling_index: index,
            inherited_column: 0,
        })
        .collect();

    while let Some(visit) = stack.pop() {
        let is_new_branch = visit.sibling_index > 0;
        let column = if is_new_branch {
            let column = next_column;
            next_column += 1;
            column
        } else {
            visit.inherited_column
        };

        out.push(FlatNode {
            id: visit.node.id.clone(),
            label: visit.node.label.clone(),
            description: visit.node.description.clone(),
            column,
            parent_id: visit.parent_id.map(str::to_string),
            is_new_branch,
        });

        let node = visit.node;
        stack.extend(
            node.children
                .iter()
                .enumerate()
                .rev()
                .map(move |(index, child)| Visit {
                    node: child,
                    parent_id: Some(node.id.as_str()),
                    sibling_index: index,
                    inherited_column: column,
                }),
        );
    }

    out
}

/// Highest column used by a flattened layout (0 when empty)
pub fn max_column(flat: &[FlatNode]) -> usize {
    flat.iter().map(|n| n.column).max().unwrap_or(0)
}
