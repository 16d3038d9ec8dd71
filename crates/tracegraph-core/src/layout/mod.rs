//! Git-log style lane layout for a forest of tree nodes.
//!
//! The pipeline is three pure passes, each consuming the previous output:
//!
//! 1. [`columns::assign_columns`] flattens the forest in pre-order and gives
//!    every node a lane. The first child stays in its parent's lane; every
//!    other child (and every root after the first) opens a fresh lane.
//! 2. [`lanes::build_lane_spans`] computes the vertical pixel extent of each
//!    lane.
//! 3. [`connectors::build_connectors`] emits the straight lane segments and
//!    the cubic S-curves joining a parent to each branch it opens.
//!
//! [`graph::compute_layout`] runs all three and adds the drawing-surface size.

pub mod columns;
pub mod connectors;
pub mod graph;
pub mod lanes;
pub mod metrics;

pub use columns::{assign_columns, max_column};
pub use connectors::{build_connectors, BranchCurve, Connectors, LaneSegment, Point};
pub use graph::{compute_layout, GraphLayout};
pub use lanes::{build_lane_spans, LaneSpan};
pub use metrics::{col_x, curve_height, row_y, LayoutMetrics};
