use super::Result;
use serde::Serialize;
use std::time::Instant;
use tracegraph_core::diff::{compute_message_diff, render_human_summary, DiffResult};
use tracegraph_core::errors::{ExError, TraceGraphError};
use tracegraph_core::trace::{MessageCatalog, TraceRecord};
use tracegraph_core::Message;
use tracegraph_core::{log_op_end, log_op_error, log_op_start};
use tracegraph_core_types::schema::{OP_DIFF_MESSAGES, OP_DIFF_TRACE_RECORD};

/// Diff of one recorded request against the request before it
#[derive(Debug, Clone, Serialize)]
pub struct TraceDiffResult {
    pub record_id: String,
    /// None for the first record in the trace
    pub parent_record_id: Option<String>,
    pub diff: DiffResult<Message>,
    /// Plain-text rendering of `diff`
    pub human_summary: String,
}

/// Diff two message id sequences resolved through a catalog
///
/// `parent_ids` of None takes the first-request path: every resolvable
/// current message is an addition. Ids missing from the catalog are left
/// out of the result.
pub fn diff_messages(
    parent_ids: Option<&[String]>,
    current_ids: &[String],
    catalog: &MessageCatalog,
) -> DiffResult<Message> {
    log_op_start!(
        OP_DIFF_MESSAGES,
        parent_len = ?parent_ids.map(<[String]>::len),
        current_len = current_ids.len()
    );
    let start = Instant::now();

    let diff = compute_message_diff(parent_ids, current_ids, |id| catalog.resolve(id));

    log_op_end!(
        OP_DIFF_MESSAGES,
        duration_ms = start.elapsed().as_millis() as u64,
        unchanged = diff.summary.unchanged,
        added = diff.summary.added,
        deleted = diff.summary.deleted
    );

    diff
}

/// Diff record `index` of a trace against record `index - 1`
///
/// Record 0 has no predecessor and is diffed as a first request.
///
/// # Errors
/// * `ERR_NOT_FOUND` - `index` is past the end of `records`
pub fn diff_trace_record(records: &[TraceRecord], index: usize) -> Result<TraceDiffResult> {
    log_op_start!(OP_DIFF_TRACE_RECORD, index = index);
    let start = Instant::now();

    let result = diff_trace_record_impl(records, index).map_err(|e| {
        log_op_error!(
            OP_DIFF_TRACE_RECORD,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        OP_DIFF_TRACE_RECORD,
        duration_ms = start.elapsed().as_millis() as u64,
        record_id = result.record_id.as_str()
    );

    Ok(result)
}

fn diff_trace_record_impl(records: &[TraceRecord], index: usize) -> Result<TraceDiffResult> {
    let current = records.get(index).ok_or_else(|| {
        ExError::from(TraceGraphError::TraceRecordNotFound {
            index,
            available: records.len(),
        })
        .with_op(OP_DIFF_TRACE_RECORD)
    })?;
    let parent = index.checked_sub(1).and_then(|i| records.get(i));

    let mut catalog = MessageCatalog::new();
    let parent_ids = parent.map(|record| catalog.ingest(record));
    let current_ids = catalog.ingest(current);

    let diff = diff_messages(parent_ids.as_deref(), &current_ids, &catalog);
    let human_summary = render_human_summary(&diff);

    Ok(TraceDiffResult {
        record_id: current.id.clone(),
        parent_record_id: parent.map(|record| record.id.clone()),
        diff,
        human_summary,
    })
}
