//! tracegraph engine - orchestration layer
//!
//! Wraps the pure layout and diff engines with input validation, structured
//! operation logging and error classification. The CLI talks to this layer
//! only.

pub mod commands;

pub use commands::diff::{diff_messages, diff_trace_record, TraceDiffResult};
pub use commands::layout::layout_forest;
