//! Command orchestration layer.
//!
//! Every command follows the same shape:
//! - `log_op_start!` at entry
//! - `log_op_end!` with result counts on success
//! - `log_op_error!` with the classified error on failure

pub mod diff;
pub mod layout;

use tracegraph_core::errors::ExError;

/// Result type for engine commands
pub type Result<T> = std::result::Result<T, ExError>;
