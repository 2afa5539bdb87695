//! Force-directed layout engine
//!
//! This module contains the force-directed strategy. Connected nodes are
//! seeded around the most connected node, relaxed by a force simulation and
//! pushed apart where they still overlap. Isolated nodes are stacked beside
//! the connected cluster.

mod engine;
mod placement;
mod simulation;

pub use engine::Engine as ForceDirected;
