//! Geometric primitives for node placement.
//!
//! This module provides the geometric types shared by the layout engine and
//! the renderers that consume its output.
//!
//! # Overview
//!
//! - [`Point`] - A floating-point 2D coordinate used while a layout is computed
//! - [`Size`] - Integer width and height of a node
//! - [`Position`] - Integer top-left corner of a placed node
//! - [`Bounds`] - The smallest axis-aligned box around a set of points
//! - [`CanvasExtent`] - Final canvas dimensions
//!
//! # Coordinate System
//!
//! erlay uses a coordinate system consistent with SVG and draw.io:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! While a layout runs, nodes are tracked by the [`Point`] at their center.
//! Once it finishes, every node is reported by the [`Position`] of its
//! top-left corner in whole pixels.

use serde::{Deserialize, Serialize};

/// A 2D point in layout space.
///
/// Points use `f64` coordinates and provide operations for basic vector math.
///
/// # Examples
///
/// ```
/// # use erlay_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// // Vector addition
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// // Vector subtraction
/// let diff = p1.sub_point(p2);
/// assert_eq!(diff.x(), 5.0);
/// assert_eq!(diff.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates the unit vector pointing at `angle` radians.
    pub fn from_angle(angle: f64) -> Self {
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use erlay_core::geometry::Point;
    /// let point = Point::new(10.0, 20.0);
    ///
    /// let doubled = point.scale(2.0);
    /// assert_eq!(doubled.x(), 20.0);
    /// assert_eq!(doubled.y(), 40.0);
    /// ```
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns a new point with absolute values of both coordinates
    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }
}

/// Width and height of a node in whole pixels.
///
/// Sizes are supplied by the caller (usually from text measurement of the
/// table it represents) and never change while a layout runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> u32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> u32 {
        self.height
    }

    /// Returns true if either dimension is zero
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns half of the width and height as a vector.
    ///
    /// Adding this to a top-left corner yields the center of the box.
    pub fn half_extent(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Top-left corner of a placed node in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the corner
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the corner
    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns true if neither coordinate is negative
    pub fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    /// Returns the center of a box of `size` whose top-left corner is here.
    ///
    /// # Examples
    ///
    /// ```
    /// # use erlay_core::geometry::{Position, Size};
    /// let center = Position::new(50, 50).center(Size::new(100, 40));
    /// assert_eq!(center.x(), 100.0);
    /// assert_eq!(center.y(), 70.0);
    /// ```
    pub fn center(self, size: Size) -> Point {
        self.to_point().add_point(size.half_extent())
    }

    /// Converts the corner into a floating-point [`Point`]
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Returns the smallest bounds containing every point, or `None` when
    /// the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use erlay_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::enclosing([Point::new(3.0, 9.0), Point::new(-1.0, 4.0)]).unwrap();
    /// assert_eq!(bounds.min_x(), -1.0);
    /// assert_eq!(bounds.max_y(), 9.0);
    ///
    /// assert!(Bounds::enclosing(std::iter::empty()).is_none());
    /// ```
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc, point| {
            let single = Self {
                min_x: point.x,
                min_y: point.y,
                max_x: point.x,
                max_y: point.y,
            };
            Some(match acc {
                Some(bounds) => single.merge(&bounds),
                None => single,
            })
        })
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Final width and height of the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasExtent {
    width: u32,
    height: u32,
}

impl CanvasExtent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the canvas width
    pub fn width(self) -> u32 {
        self.width
    }

    /// Returns the canvas height
    pub fn height(self) -> u32 {
        self.height
    }

    /// Returns an extent at least as large as `minimum` in both directions
    pub fn at_least(self, minimum: CanvasExtent) -> Self {
        Self {
            width: self.width.max(minimum.width),
            height: self.height.max(minimum.height),
        }
    }

    /// Returns true if a box of `size` at `position` fits inside the canvas
    pub fn contains(self, position: Position, size: Size) -> bool {
        position.is_non_negative()
            && i64::from(position.x) + i64::from(size.width) <= i64::from(self.width)
            && i64::from(position.y) + i64::from(size.height) <= i64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!((point.x(), point.y()), (0.0, 0.0));
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.add_point(p2), Point::new(4.0, 6.0));
        assert_eq!(p2.sub_point(p1), Point::new(2.0, 2.0));
    }

    #[test]
    fn test_point_hypot() {
        assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
        assert_eq!(Point::default().hypot(), 0.0);
    }

    #[test]
    fn test_point_from_angle() {
        let right = Point::from_angle(0.0);
        assert_eq!(right, Point::new(1.0, 0.0));

        let down = Point::from_angle(std::f64::consts::FRAC_PI_2);
        assert!(down.x().abs() < 1e-12);
        assert!((down.y() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_abs_and_scale() {
        let point = Point::new(5.0, -3.0);
        assert_eq!(point.abs(), Point::new(5.0, 3.0));
        assert_eq!(point.scale(-2.0), Point::new(-10.0, 6.0));
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn test_size_half_extent() {
        let half = Size::new(101, 40).half_extent();
        assert_eq!(half, Point::new(50.5, 20.0));
    }

    #[test]
    fn test_position_center() {
        let center = Position::new(10, 20).center(Size::new(100, 50));
        assert_eq!(center, Point::new(60.0, 45.0));
        assert_eq!(Position::new(-4, 7).to_point(), Point::new(-4.0, 7.0));
    }

    #[test]
    fn test_position_is_non_negative() {
        assert!(Position::new(0, 0).is_non_negative());
        assert!(!Position::new(-1, 0).is_non_negative());
        assert!(!Position::new(0, -1).is_non_negative());
    }

    #[test]
    fn test_bounds_enclosing() {
        let bounds = Bounds::enclosing([
            Point::new(1.0, 5.0),
            Point::new(-2.0, 8.0),
            Point::new(4.0, -3.0),
        ])
        .expect("non-empty input");

        assert_eq!(bounds.min_x(), -2.0);
        assert_eq!(bounds.min_y(), -3.0);
        assert_eq!(bounds.max_x(), 4.0);
        assert_eq!(bounds.max_y(), 8.0);
        assert_eq!(bounds.min_point(), Point::new(-2.0, -3.0));
    }

    #[test]
    fn test_canvas_extent_at_least() {
        let extent = CanvasExtent::new(300, 900).at_least(CanvasExtent::new(800, 600));
        assert_eq!(extent, CanvasExtent::new(800, 900));
    }

    #[test]
    fn test_canvas_extent_contains() {
        let canvas = CanvasExtent::new(200, 100);
        assert!(canvas.contains(Position::new(100, 50), Size::new(100, 50)));
        assert!(!canvas.contains(Position::new(101, 50), Size::new(100, 50)));
        assert!(!canvas.contains(Position::new(-1, 0), Size::new(10, 10)));
    }
}
