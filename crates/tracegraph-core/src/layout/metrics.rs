//! Pixel metrics shared by every layout pass.

use crate::errors::{Result, TraceGraphError};
use serde::{Deserialize, Serialize};

pub const ROW_HEIGHT: f64 = 40.0;
pub const COL_WIDTH: f64 = 20.0;
pub const NODE_RADIUS: f64 = 5.0;
/// Padding before the first column
pub const LEFT_PAD: f64 = 14.0;
/// Branch curve height per pixel of horizontal travel
pub const CURVE_RATIO: f64 = 0.75;

/// Row/column geometry used to turn layout indices into pixels
///
/// Missing fields in a serialized metrics file fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub row_height: f64,
    pub col_width: f64,
    pub node_radius: f64,
    pub left_pad: f64,
    pub curve_ratio: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            row_height: ROW_HEIGHT,
            col_width: COL_WIDTH,
            node_radius: NODE_RADIUS,
            left_pad: LEFT_PAD,
            curve_ratio: CURVE_RATIO,
        }
    }
}

impl LayoutMetrics {
    /// Vertical centre of a row
    pub fn row_y(&self, row: usize) -> f64 {
        row as f64 * self.row_height + self.row_height / 2.0
    }

    /// Horizontal centre of a column
    pub fn col_x(&self, column: usize) -> f64 {
        self.left_pad + column as f64 * self.col_width
    }

    /// Height of a branch S-curve spanning `dx` pixels horizontally
    ///
    /// Never shorter than one row; wider jumps get proportionally taller arcs.
    pub fn curve_height(&self, dx: f64) -> f64 {
        self.row_height.max(dx * self.curve_ratio)
    }

    /// Drawing-surface width needed for lanes `0..=max_column`
    pub fn surface_width(&self, max_column: usize) -> f64 {
        self.left_pad * 2.0 + (max_column + 1) as f64 * self.col_width
    }

    /// Drawing-surface height for `rows` rows
    pub fn surface_height(&self, rows: usize) -> f64 {
        rows as f64 * self.row_height
    }

    /// Reject metrics that would produce degenerate or non-finite geometry
    ///
    /// # Errors
    /// * `InvalidMetrics` - a size is non-finite, row height / column width is
    ///   not positive, or padding, radius or curve ratio is negative
    pub fn validate(&self) -> Result<()> {
        let positive = [("row_height", self.row_height), ("col_width", self.col_width)];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TraceGraphError::InvalidMetrics {
                    reason: format!("{} must be a positive number, got {}", name, value),
                });
            }
        }

        let non_negative = [
            ("node_radius", self.node_radius),
            ("left_pad", self.left_pad),
            ("curve_ratio", self.curve_ratio),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TraceGraphError::InvalidMetrics {
                    reason: format!("{} must be a non-negative number, got {}", name, value),
                });
            }
        }

        Ok(())
    }
}

/// [`LayoutMetrics::row_y`] with default metrics
pub fn row_y(row: usize) -> f64 {
    LayoutMetrics::default().row_y(row)
}

/// [`LayoutMetrics::col_x`] with default metrics
pub fn col_x(column: usize) -> f64 {
    LayoutMetrics::default().col_x(column)
}

/// [`LayoutMetrics::curve_height`] with default metrics
pub fn curve_height(dx: f64) -> f64 {
    LayoutMetrics::default().curve_height(dx)
}
