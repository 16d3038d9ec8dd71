use serde::{Deserialize, Serialize};

/// TreeNode - one node of the input forest
///
/// Owned by the caller and never mutated by the layout engine. Identifiers
/// must be unique across the whole forest and the structure must be acyclic;
/// neither is checked by the engine itself (see `rules::validation`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Unique identifier across the forest
    pub id: String,

    /// Short display label
    pub label: String,

    /// Longer free-form description
    #[serde(default)]
    pub description: String,

    /// Ordered children; absent in serialized input means a leaf
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: append children in order
    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Drop for TreeNode {
    /// Tear the subtree down from a heap stack so deep chains drop in
    /// constant call-stack depth
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// FlatNode - one row of the computed layout
///
/// Produced once per `TreeNode` in pre-order. The position of a FlatNode in
/// the flattened sequence is its row index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatNode {
    pub id: String,
    pub label: String,
    pub description: String,

    /// Lane the node is drawn in
    pub column: usize,

    /// Parent node id; None only for forest roots
    pub parent_id: Option<String>,

    /// True when this node opened a new lane (non-first child or non-first root)
    pub is_new_branch: bool,
}

impl FlatNode {
    /// Whether a branch connector should be drawn into this node
    pub fn needs_connector(&self) -> bool {
        self.is_new_branch && self.parent_id.is_some()
    }
}
