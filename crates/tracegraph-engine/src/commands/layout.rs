use super::Result;
use std::time::Instant;
use tracegraph_core::errors::ExError;
use tracegraph_core::layout::{compute_layout, GraphLayout, LayoutMetrics};
use tracegraph_core::rules::validation::validate_forest;
use tracegraph_core::TreeNode;
use tracegraph_core::{log_op_end, log_op_error, log_op_start};
use tracegraph_core_types::schema::OP_LAYOUT_FOREST;

/// Validate and lay out a forest
///
/// Rejects unusable metrics and forests with empty or repeated ids before
/// running the layout passes.
///
/// # Errors
/// * `ERR_INVALID_INPUT` - metrics are degenerate or a node id is empty
/// * `ERR_DUPLICATE_ID` - a node id appears more than once
pub fn layout_forest(forest: &[TreeNode], metrics: &LayoutMetrics) -> Result<GraphLayout> {
    log_op_start!(OP_LAYOUT_FOREST, root_count = forest.len());
    let start = Instant::now();

    let result = layout_forest_impl(forest, metrics).map_err(|e| {
        log_op_error!(
            OP_LAYOUT_FOREST,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        OP_LAYOUT_FOREST,
        duration_ms = start.elapsed().as_millis() as u64,
        node_count = result.nodes.len(),
        column_count = result.column_count(),
        curve_count = result.connectors.curves.len()
    );

    Ok(result)
}

fn layout_forest_impl(forest: &[TreeNode], metrics: &LayoutMetrics) -> Result<GraphLayout> {
    metrics.validate().map_err(ExError::from)?;
    validate_forest(forest).map_err(|e| ExError::from(e).with_op(OP_LAYOUT_FOREST))?;
    Ok(compute_layout(forest, metrics))
}
