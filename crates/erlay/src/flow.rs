//! Row-wrapping placement for nodes added without coordinates.
//!
//! Nodes are laid out left to right starting at the margin. A node that would
//! cross the right edge (`wrap_width - margin`) starts a new row, unless it
//! is the first node of its row.

use erlay_core::geometry::{Position, Size};

use crate::config::{CanvasConfig, FlowConfig};

/// Cursor that hands out positions in reading order.
///
/// # Examples
///
/// ```
/// # use erlay::{config::{CanvasConfig, FlowConfig}, flow::FlowPlacer};
/// # use erlay_core::geometry::{Position, Size};
/// let mut flow = FlowPlacer::new(&FlowConfig::default(), &CanvasConfig::default());
///
/// assert_eq!(flow.next(Size::new(400, 120)), Position::new(50, 50));
/// assert_eq!(flow.next(Size::new(400, 120)), Position::new(500, 50));
/// // 950 + 400 crosses 1200 - 50, so the third node wraps
/// assert_eq!(flow.next(Size::new(400, 120)), Position::new(50, 250));
/// ```
#[derive(Debug, Clone)]
pub struct FlowPlacer {
    margin: i64,
    right_edge: i64,
    row_height: i64,
    spacing: i64,
    x: i64,
    y: i64,
    tallest_in_row: i64,
    row_len: usize,
}

impl FlowPlacer {
    pub fn new(flow: &FlowConfig, canvas: &CanvasConfig) -> Self {
        let margin = i64::from(canvas.margin());
        Self {
            margin,
            right_edge: i64::from(flow.wrap_width()) - margin,
            row_height: i64::from(flow.row_height()),
            spacing: i64::from(flow.spacing()),
            x: margin,
            y: margin,
            tallest_in_row: 0,
            row_len: 0,
        }
    }

    /// Returns the position for a node of `size` and advances the cursor
    pub fn next(&mut self, size: Size) -> Position {
        let width = i64::from(size.width());
        let height = i64::from(size.height());

        if self.row_len > 0 && self.x + width > self.right_edge {
            self.y += self.row_height.max(self.tallest_in_row + self.spacing);
            self.x = self.margin;
            self.tallest_in_row = 0;
            self.row_len = 0;
        }

        let position = Position::new(clamp(self.x), clamp(self.y));

        self.x += width + self.spacing;
        self.tallest_in_row = self.tallest_in_row.max(height);
        self.row_len += 1;

        position
    }
}

fn clamp(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
