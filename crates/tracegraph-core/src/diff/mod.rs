//! Message history diff.
//!
//! Compares the ordered message ids of two requests and classifies every
//! message as unchanged, added or deleted.
//!
//! ## Entry points
//!
//! ```
//! use tracegraph_core::diff::{compute_message_diff, DiffItem};
//!
//! let parent = ["1", "2", "3", "4"];
//! let current = ["1", "3", "4", "5"];
//! let diff = compute_message_diff(Some(&parent[..]), &current, |id: &&str| Some(id.to_string()));
//!
//! assert_eq!(diff.summary.unchanged, 3);
//! assert!(matches!(&diff.items[1], DiffItem::Deleted { old_message } if old_message == "2"));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: the LCS tie-break is fixed, so identical inputs always
//!   produce the same classification.
//! - **Document order**: changes are emitted in contiguous runs between
//!   unchanged anchors, deletions before additions within a run.
//! - **Resolver tolerance**: ids the lookup cannot resolve are left out of
//!   both the items and the summary.

pub mod grouping;
pub mod human_summary;
pub mod lcs;
pub mod model;
pub mod reconcile;

pub use grouping::{group_unchanged, unchanged_label, DiffGroup};
pub use human_summary::render_human_summary;
pub use lcs::{compute_lcs, compute_lcs_with, TieBreak};
pub use model::{DiffItem, DiffKind, DiffResult, DiffSummary};
pub use reconcile::{compute_message_diff, reconcile, reconcile_first_request, reconcile_with};
