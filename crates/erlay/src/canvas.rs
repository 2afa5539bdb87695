//! Canvas sizing and conversion of centre coordinates to pixel positions.

use log::debug;

use erlay_core::{
    geometry::{Bounds, CanvasExtent, Point, Position, Size},
    node::HasGeometry,
};

use crate::config::CanvasConfig;

/// Converts centre coordinates into top-left pixel positions.
///
/// The layout is translated so that its leftmost box edge lies at `margin`
/// and its topmost box edge at `margin`. Coordinates are then floored to
/// whole pixels, so every returned position is at least `margin`.
pub fn normalize(centers: &[Point], sizes: &[Size], margin: u32) -> Vec<Position> {
    let top_lefts: Vec<Point> = centers
        .iter()
        .zip(sizes)
        .map(|(center, size)| center.sub_point(size.half_extent()))
        .collect();

    let Some(bounds) = Bounds::enclosing(top_lefts.iter().copied()) else {
        return Vec::new();
    };
    let margin = Point::new(f64::from(margin), f64::from(margin));

    top_lefts
        .into_iter()
        .map(|top_left| {
            // The leftmost and topmost edges land exactly on the margin.
            let moved = top_left.sub_point(bounds.min_point()).add_point(margin);
            Position::new(to_pixel(moved.x()), to_pixel(moved.y()))
        })
        .collect()
}

/// Returns the smallest canvas containing every box plus the margin, never
/// smaller than the configured minimum.
pub fn fit_extent(
    boxes: impl IntoIterator<Item = (Position, Size)>,
    canvas: &CanvasConfig,
) -> CanvasExtent {
    let (right, bottom) = boxes
        .into_iter()
        .fold((0i64, 0i64), |(right, bottom), (position, size)| {
            (
                right.max(i64::from(position.x()) + i64::from(size.width())),
                bottom.max(i64::from(position.y()) + i64::from(size.height())),
            )
        });

    let margin = i64::from(canvas.margin());
    CanvasExtent::new(to_extent(right + margin), to_extent(bottom + margin))
        .at_least(canvas.minimum())
}

/// Recomputes the canvas size from the current node positions.
///
/// Nodes are not moved. An empty slice yields the configured minimum.
///
/// # Examples
///
/// ```
/// # use erlay::{adjust_canvas_size, config::CanvasConfig};
/// # use erlay_core::{geometry::{CanvasExtent, Position, Size}, node::Node};
/// let nodes = vec![
///     Node::new("users", Size::new(200, 100)).with_position(Position::new(900, 40)),
/// ];
///
/// let extent = adjust_canvas_size(&nodes, &CanvasConfig::default());
/// assert_eq!(extent, CanvasExtent::new(1150, 600));
/// ```
pub fn adjust_canvas_size<N: HasGeometry>(nodes: &[N], canvas: &CanvasConfig) -> CanvasExtent {
    let extent = fit_extent(
        nodes.iter().map(|node| (node.position(), node.size())),
        canvas,
    );
    debug!(
        nodes = nodes.len(),
        width = extent.width(),
        height = extent.height();
        "Canvas size adjusted"
    );
    extent
}

fn to_pixel(value: f64) -> i32 {
    // `as` saturates at the i32 bounds
    value.floor() as i32
}

fn to_extent(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
