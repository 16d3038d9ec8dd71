//! Plain-text rendering of a message diff.

use super::grouping::{group_unchanged, unchanged_label, DiffGroup};
use super::model::DiffResult;
use crate::model::Message;

const PREVIEW_CHARS: usize = 80;

/// Render a line-per-change text summary of a message diff
///
/// Unchanged runs collapse to a single `···` line; added and deleted
/// messages get `+` / `-` prefixes with their role and a one-line preview.
pub fn render_human_summary(diff: &DiffResult<Message>) -> String {
    let mut out = String::new();

    out.push_str("## Message Diff\n\n");
    out.push_str(&format!(
        "**Summary**: {} unchanged, {} added, {} deleted\n\n",
        diff.summary.unchanged, diff.summary.added, diff.summary.deleted
    ));

    if diff.items.is_empty() {
        out.push_str("_No messages._\n");
        return out;
    }

    for group in group_unchanged(diff.items.iter().cloned()) {
        match group {
            DiffGroup::Unchanged { messages } => {
                out.push_str(&format!("  ··· {}\n", unchanged_label(messages.len())));
            }
            DiffGroup::Added { message } => {
                out.push_str(&format!("+ [{}] {}\n", message.role, preview(&message)));
            }
            DiffGroup::Deleted { message } => {
                out.push_str(&format!("- [{}] {}\n", message.role, preview(&message)));
            }
        }
    }

    out
}

/// First line of the message text, truncated to a fixed number of chars
fn preview(message: &Message) -> String {
    let text = message.text();
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() > PREVIEW_CHARS {
        let truncated: String = first_line.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", truncated)
    } else {
        first_line.to_string()
    }
}
