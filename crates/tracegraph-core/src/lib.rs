//! tracegraph core - pure layout and diff engines
//!
//! This crate provides the structure behind the trace viewer's two
//! visualizations:
//! - Git-log style lane layout for a forest of tree nodes (columns, lane
//!   spans, S-curve branch connectors)
//! - LCS-based message history diff between two requests
//! - Forest validation for callers that want malformed input rejected
//! - Trace record parsing and a content-addressed message catalog
//! - Error and structured logging facilities shared by the outer crates
//!
//! The layout and diff engines are pure functions: no I/O, no logging, no
//! caching across calls.

pub mod diff;
pub mod errors;
pub mod layout;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod trace;

// Re-export commonly used types
pub use diff::{compute_lcs, compute_message_diff, reconcile, DiffItem, DiffResult, DiffSummary};
pub use errors::{ExError, ExErrorKind, Result, TraceGraphError};
pub use layout::{assign_columns, build_connectors, build_lane_spans, LaneSpan, LayoutMetrics};
pub use model::{FlatNode, Message, TreeNode};
pub use trace::{parse_trace_jsonl, MessageCatalog, TraceRecord};
