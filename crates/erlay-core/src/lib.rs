//! Core types shared by the erlay layout engine and its renderers.
//!
//! This crate holds the geometry primitives and the adapter traits a renderer
//! implements so its own node and edge types can be laid out.

pub mod geometry;
pub mod node;

pub use geometry::{Bounds, CanvasExtent, Point, Position, Size};
pub use node::{Edge, HasEndpoints, HasGeometry, HasId, Node};
