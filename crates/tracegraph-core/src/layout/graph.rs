//! Full layout of a forest, ready for a renderer.

use super::columns::{assign_columns, max_column};
use super::connectors::{build_connectors, Connectors, Point};
use super::lanes::{build_lane_spans, LaneSpan};
use super::metrics::LayoutMetrics;
use crate::model::{FlatNode, TreeNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything a renderer needs to draw the dependency graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLayout {
    /// Rows in draw order
    pub nodes: Vec<FlatNode>,
    /// Vertical extent per column
    pub lanes: BTreeMap<usize, LaneSpan>,
    pub connectors: Connectors,
    /// Drawing-surface width in pixels
    pub width: f64,
    /// Drawing-surface height in pixels
    pub height: f64,
    pub node_radius: f64,
}

impl GraphLayout {
    /// Number of distinct lanes
    pub fn column_count(&self) -> usize {
        self.lanes.len()
    }

    /// Centre of the node circle for a row, if the row exists
    pub fn node_center(&self, row: usize, metrics: &LayoutMetrics) -> Option<Point> {
        self.nodes
            .get(row)
            .map(|node| Point::new(metrics.col_x(node.column), metrics.row_y(row)))
    }
}

/// Lay out a forest end to end
///
/// The surface is wide enough for `max_column + 1` lanes plus padding on
/// both sides; an empty forest still reserves one lane.
pub fn compute_layout(forest: &[TreeNode], metrics: &LayoutMetrics) -> GraphLayout {
    let nodes = assign_columns(forest);
    let lanes = build_lane_spans(&nodes, metrics);
    let connectors = build_connectors(&nodes, &lanes, metrics);

    GraphLayout {
        width: metrics.surface_width(max_column(&nodes)),
        height: metrics.surface_height(nodes.len()),
        node_radius: metrics.node_radius,
        nodes,
        lanes,
        connectors,
    }
}
