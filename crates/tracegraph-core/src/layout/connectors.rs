use super::lanes::{row_index, LaneSpan};
use super::metrics::LayoutMetrics;
use crate::model::FlatNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Straight vertical line for one lane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneSegment {
    pub column: usize,
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
}

/// Cubic Bézier joining a parent row to the lane of a branch it opened
///
/// Both control points sit at half the curve height, giving vertical
/// tangents at the start and at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchCurve {
    pub node_id: String,
    pub parent_id: String,
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl BranchCurve {
    /// Build the curve from the parent centre down-and-across to the child lane
    pub fn between(
        parent: &FlatNode,
        parent_row: usize,
        child: &FlatNode,
        metrics: &LayoutMetrics,
    ) -> Self {
        let px = metrics.col_x(parent.column);
        let py = metrics.row_y(parent_row);
        let cx = metrics.col_x(child.column);
        let height = metrics.curve_height((cx - px).abs());
        let mid_y = py + height / 2.0;

        Self {
            node_id: child.id.clone(),
            parent_id: parent.id.clone(),
            start: Point::new(px, py),
            control1: Point::new(px, mid_y),
            control2: Point::new(cx, mid_y),
            end: Point::new(cx, py + height),
        }
    }

    pub fn height(&self) -> f64 {
        self.end.y - self.start.y
    }
}

/// All connector geometry of a layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connectors {
    /// One segment per drawable lane, ascending by column
    pub lanes: Vec<LaneSegment>,
    /// One curve per new-branch node with a resolvable parent, in row order
    pub curves: Vec<BranchCurve>,
}

/// Segments for every lane whose span covers more than a single point
pub fn lane_segments(spans: &BTreeMap<usize, LaneSpan>, metrics: &LayoutMetrics) -> Vec<LaneSegment> {
    spans
        .iter()
        .filter(|(_, span)| span.is_drawable())
        .map(|(&column, span)| LaneSegment {
            column,
            x: metrics.col_x(column),
            y1: span.open_y,
            y2: span.end_y,
        })
        .collect()
}

/// Emit lane segments and branch S-curves for a flattened layout
///
/// A new-branch node whose parent id does not resolve to a row gets no
/// curve; the rest of the layout is unaffected.
pub fn build_connectors(
    flat: &[FlatNode],
    spans: &BTreeMap<usize, LaneSpan>,
    metrics: &LayoutMetrics,
) -> Connectors {
    let rows = row_index(flat);

    let curves = flat
        .iter()
        .filter(|node| node.needs_connector())
        .filter_map(|node| {
            let parent_row = *rows.get(node.parent_id.as_deref()?)?;
            Some(BranchCurve::between(&flat[parent_row], parent_row, node, metrics))
        })
        .collect();

    Connectors {
        lanes: lane_segments(spans, metrics),
        curves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::columns::assign_columns;
    use crate::layout::lanes::build_lane_spans;
    use crate::model::TreeNode;

    fn fan(children: usize) -> Vec<FlatNode> {
        let kids = (0..children).map(|i| TreeNode::new(format!("c{}", i), format!("C{}", i)));
        assign_columns(&[TreeNode::new("root", "Root").with_children(kids)])
    }

    #[test]
    fn test_curve_control_points_give_vertical_tangents() {
        let flat = fan(2);
        let metrics = LayoutMetrics::default();
        let curve = BranchCurve::between(&flat[0], 0, &flat[2], &metrics);

        assert_eq!(curve.start, Point::new(14.0, 20.0));
        assert_eq!(curve.control1, Point::new(14.0, 40.0));
        assert_eq!(curve.control2, Point::new(34.0, 40.0));
        assert_eq!(curve.end, Point::new(34.0, 60.0));
        assert_eq!(curve.height(), 40.0);
    }

    #[test]
    fn test_far_branch_gets_taller_curve() {
        let flat = fan(6);
        let metrics = LayoutMetrics::default();
        let spans = build_lane_spans(&flat, &metrics);
        let connectors = build_connectors(&flat, &spans, &metrics);

        // c5 sits in column 5: dx = 100, height = 75
        let far = connectors
            .curves
            .iter()
            .find(|c| c.node_id == "c5")
            .unwrap();
        assert_eq!(far.height(), 75.0);
        assert_eq!(far.end.y, 95.0);
    }

    #[test]
    fn test_single_row_lanes_are_skipped() {
        let flat = assign_columns(&[TreeNode::new("a", "A"), TreeNode::new("b", "B")]);
        let metrics = LayoutMetrics::default();
        let spans = build_lane_spans(&flat, &metrics);
        let connectors = build_connectors(&flat, &spans, &metrics);

        assert_eq!(spans.len(), 2);
        assert!(connectors.lanes.is_empty());
        // b is a new branch but a root: no parent row to curve from
        assert!(connectors.curves.is_empty());
    }

    #[test]
    fn test_branch_lanes_drawn_from_curve_end() {
        let flat = fan(3);
        let metrics = LayoutMetrics::default();
        let spans = build_lane_spans(&flat, &metrics);
        let connectors = build_connectors(&flat, &spans, &metrics);

        // Lane 0 spans root..c0; lanes 1 and 2 open at their curve end,
        // above the branch row.
        let columns: Vec<usize> = connectors.lanes.iter().map(|l| l.column).collect();
        assert_eq!(columns, vec![0, 1, 2]);
        assert_eq!(connectors.lanes[1].y1, 60.0);
        assert_eq!(connectors.lanes[1].y2, 100.0);
        assert_eq!(connectors.curves.len(), 2);
    }

    #[test]
    fn test_missing_parent_omits_curve() {
        let flat = vec![FlatNode {
            id: "x".to_string(),
            label: "X".to_string(),
            description: String::new(),
            column: 1,
            parent_id: Some("ghost".to_string()),
            is_new_branch: true,
        }];
        let metrics = LayoutMetrics::default();
        let spans = build_lane_spans(&flat, &metrics);
        let connectors = build_connectors(&flat, &spans, &metrics);

        assert!(connectors.curves.is_empty());
        assert!(connectors.lanes.is_empty());
    }
}
