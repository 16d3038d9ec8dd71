use super::metrics::LayoutMetrics;
use crate::model::FlatNode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Vertical pixel extent of one lane's connector line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneSpan {
    pub open_y: f64,
    pub end_y: f64,
}

impl LaneSpan {
    /// Whether the lane has any visible line to draw
    pub fn is_drawable(&self) -> bool {
        self.end_y > self.open_y
    }

    pub fn contains(&self, y: f64) -> bool {
        self.open_y <= y && y <= self.end_y
    }
}

/// Map each node id to its row index
///
/// With duplicate ids (a caller contract violation) the last row wins.
pub(crate) fn row_index(flat: &[FlatNode]) -> HashMap<&str, usize> {
    flat.iter()
        .enumerate()
        .map(|(row, node)| (node.id.as_str(), row))
        .collect()
}

/// Compute the vertical span of every lane
///
/// Rows are processed in order; row index is the position in `flat`.
/// - `end_y` tracks the lowest row seen in the column.
/// - A new branch whose parent row is known opens where its incoming
///   S-curve ends: parent row y plus the curve height for the horizontal
///   distance between the two columns. The opening is capped at the node's
///   own row so the lane always covers its rows.
/// - Any other node keeps the earliest row y seen in the column.
///
/// The result is keyed by column in ascending order.
pub fn build_lane_spans(flat: &[FlatNode], metrics: &LayoutMetrics) -> BTreeMap<usize, LaneSpan> {
    let rows = row_index(flat);
    let mut spans: BTreeMap<usize, LaneSpan> = BTreeMap::new();

    for (row, node) in flat.iter().enumerate() {
        let y = metrics.row_y(row);
        let prior = spans.get(&node.column).copied();
        let end_y = prior.map_or(y, |span| span.end_y.max(y));

        let branch_parent_row = if node.is_new_branch {
            node.parent_id
                .as_deref()
                .and_then(|parent_id| rows.get(parent_id).copied())
        } else {
            None
        };

        let open_y = match branch_parent_row {
            Some(parent_row) => {
                let parent = &flat[parent_row];
                let dx = (metrics.col_x(node.column) - metrics.col_x(parent.column)).abs();
                let curve_end = metrics.row_y(parent_row) + metrics.curve_height(dx);
                curve_end.min(y)
            }
            None => prior.map_or(y, |span| span.open_y.min(y)),
        };

        spans.insert(node.column, LaneSpan { open_y, end_y });
    }

    spans
}
