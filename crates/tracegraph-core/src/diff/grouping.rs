//! Collapsing runs of unchanged messages for display.

use super::model::DiffItem;
use serde::{Deserialize, Serialize};

/// A display unit of the diff view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiffGroup<M> {
    /// A maximal run of consecutive unchanged messages
    Unchanged { messages: Vec<M> },
    Added { message: M },
    Deleted { message: M },
}

/// Fold consecutive unchanged items into one group; changes stay single
///
/// Order is preserved. Unchanged groups carry the new-side message.
pub fn group_unchanged<M>(items: impl IntoIterator<Item = DiffItem<M>>) -> Vec<DiffGroup<M>> {
    let mut groups: Vec<DiffGroup<M>> = Vec::new();

    for item in items {
        match item {
            DiffItem::Unchanged { new_message, .. } => match groups.last_mut() {
                Some(DiffGroup::Unchanged { messages }) => messages.push(new_message),
                _ => groups.push(DiffGroup::Unchanged {
                    messages: vec![new_message],
                }),
            },
            DiffItem::Added { new_message } => groups.push(DiffGroup::Added {
                message: new_message,
            }),
            DiffItem::Deleted { old_message } => groups.push(DiffGroup::Deleted {
                message: old_message,
            }),
        }
    }

    groups
}

/// Caption for a collapsed run of unchanged messages
pub fn unchanged_label(count: usize) -> String {
    if count == 1 {
        "1 unchanged message".to_string()
    } else {
        format!("{} unchanged messages", count)
    }
}
