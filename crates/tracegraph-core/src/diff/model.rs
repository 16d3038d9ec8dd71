//! Diff output types.

use serde::{Deserialize, Serialize};

/// Classification of one diff item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Unchanged,
    Added,
    Deleted,
}

/// One message in the diff, tagged with how it changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiffItem<M> {
    /// Present in both requests at an aligned position
    Unchanged { old_message: M, new_message: M },
    /// Only in the current request
    Added { new_message: M },
    /// Only in the parent request
    Deleted { old_message: M },
}

impl<M> DiffItem<M> {
    pub fn kind(&self) -> DiffKind {
        match self {
            DiffItem::Unchanged { .. } => DiffKind::Unchanged,
            DiffItem::Added { .. } => DiffKind::Added,
            DiffItem::Deleted { .. } => DiffKind::Deleted,
        }
    }

    /// The message to display: the new side when there is one, else the old
    pub fn message(&self) -> &M {
        match self {
            DiffItem::Unchanged { new_message, .. } | DiffItem::Added { new_message } => {
                new_message
            }
            DiffItem::Deleted { old_message } => old_message,
        }
    }
}

/// Per-kind item counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub unchanged: usize,
    pub added: usize,
    pub deleted: usize,
}

impl DiffSummary {
    pub fn record(&mut self, kind: DiffKind) {
        match kind {
            DiffKind::Unchanged => self.unchanged += 1,
            DiffKind::Added => self.added += 1,
            DiffKind::Deleted => self.deleted += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.unchanged + self.added + self.deleted
    }

    /// True if anything was added or deleted
    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.deleted > 0
    }
}

/// Ordered diff items plus their tally
///
/// Only [`DiffResult::push`] appends items, so the summary always matches
/// the items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResult<M> {
    pub items: Vec<DiffItem<M>>,
    pub summary: DiffSummary,
}

impl<M> DiffResult<M> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            summary: DiffSummary::default(),
        }
    }

    pub fn push(&mut self, item: DiffItem<M>) {
        self.summary.record(item.kind());
        self.items.push(item);
    }

    pub fn kinds(&self) -> Vec<DiffKind> {
        self.items.iter().map(DiffItem::kind).collect()
    }
}

impl<M> Default for DiffResult<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_summary_in_step() {
        let mut result = DiffResult::new();
        result.push(DiffItem::Added { new_message: "a" });
        result.push(DiffItem::Deleted { old_message: "b" });
        result.push(DiffItem::Unchanged {
            old_message: "c",
            new_message: "c",
        });

        assert_eq!(
            result.summary,
            DiffSummary {
                unchanged: 1,
                added: 1,
                deleted: 1
            }
        );
        assert_eq!(result.summary.total(), result.items.len());
        assert!(result.summary.has_changes());
    }

    #[test]
    fn test_item_serializes_with_type_tag() {
        let item = DiffItem::Added { new_message: "m1" };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "added");
        assert_eq!(json["new_message"], "m1");
    }

    #[test]
    fn test_display_message_prefers_new_side() {
        let item = DiffItem::Unchanged {
            old_message: "old",
            new_message: "new",
        };
        assert_eq!(*item.message(), "new");
        assert_eq!(*DiffItem::Deleted { old_message: "gone" }.message(), "gone");
    }
}
