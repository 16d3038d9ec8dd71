//! Operation-boundary logging macros
//!
//! The engine wraps `layout_forest`, `diff_messages` and `diff_trace_record`
//! in these macros. Each event carries `component`, `op` and `event`, named
//! as in `tracegraph_core_types::schema` (`FIELD_COMPONENT`, `FIELD_OP`,
//! `FIELD_EVENT`); end events add `duration_ms` plus the op's own tallies
//! (`node_count`, `column_count`, `curve_count` for layouts; `unchanged`,
//! `added`, `deleted` for diffs), and error events add `err_kind` and
//! `err_code`. The test capture layer reads the same names back.
//!
//! Callers need `tracing` and `tracegraph-core-types` in their dependencies.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use tracegraph_core::log_op_start;
/// log_op_start!("layout_forest");
/// log_op_start!("layout_forest", root_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tracegraph_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tracegraph_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use tracegraph_core::log_op_end;
/// log_op_end!("diff_messages", duration_ms = 3, added = 1);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tracegraph_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tracegraph_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError) and
/// records its kind and stable code.
///
/// # Example
///
/// ```
/// # use tracegraph_core::{log_op_error, errors::TraceGraphError};
/// let err = TraceGraphError::DuplicateNodeId { node_id: "n1".to_string() };
/// log_op_error!("layout_forest", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = tracegraph_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = tracegraph_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
