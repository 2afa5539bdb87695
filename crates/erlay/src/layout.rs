//! Layout strategies and their common output.
//!
//! A strategy turns a [`LayoutGraph`] into a [`Placement`]: one top-left
//! position per node, in input order, plus the canvas size. Callers pick a
//! strategy with [`StrategyKind`] and obtain it from an [`EngineBuilder`].

pub mod engines;

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use erlay_core::geometry::{CanvasExtent, Position};

use crate::graph::LayoutGraph;

pub use engines::EngineBuilder;

/// Available layout strategies.
///
/// The names match external configuration strings (snake_case).
///
/// # Variants
///
/// - `Force` - Force-directed placement with overlap removal (default)
/// - `Hierarchical` - Referenced nodes to the left, referencing nodes to the right
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Force-directed strategy (default)
    #[default]
    Force,
    /// Levelled strategy based on reference direction
    Hierarchical,
}

impl FromStr for StrategyKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "force" => Ok(Self::Force),
            "hierarchical" => Ok(Self::Hierarchical),
            _ => Err("Unsupported layout strategy"),
        }
    }
}

impl From<StrategyKind> for &'static str {
    fn from(val: StrategyKind) -> Self {
        match val {
            StrategyKind::Force => "force",
            StrategyKind::Hierarchical => "hierarchical",
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Result of a layout strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    positions: Vec<Position>,
    extent: CanvasExtent,
}

impl Placement {
    pub fn new(positions: Vec<Position>, extent: CanvasExtent) -> Self {
        Self { positions, extent }
    }

    /// Returns the top-left position of every node, in input order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the canvas size
    pub fn extent(&self) -> CanvasExtent {
        self.extent
    }

    /// Splits the placement into its positions and extent
    pub fn into_parts(self) -> (Vec<Position>, CanvasExtent) {
        (self.positions, self.extent)
    }
}

/// A node placement algorithm.
pub trait LayoutStrategy {
    /// Places every node of `graph`.
    ///
    /// The returned positions follow the node order of `graph`.
    fn place(&self, graph: &LayoutGraph<'_>) -> Placement;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_kind_from_str() {
        assert_eq!("force".parse::<StrategyKind>(), Ok(StrategyKind::Force));
        assert_eq!(
            "hierarchical".parse::<StrategyKind>(),
            Ok(StrategyKind::Hierarchical)
        );
        assert!("sugiyama".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_strategy_kind_display() {
        assert_eq!(StrategyKind::Force.to_string(), "force");
        assert_eq!(StrategyKind::Hierarchical.to_string(), "hierarchical");
        assert_eq!(StrategyKind::default(), StrategyKind::Force);
    }

    #[test]
    fn test_placement_parts() {
        let placement = Placement::new(vec![Position::new(50, 50)], CanvasExtent::new(800, 600));
        assert_eq!(placement.positions(), &[Position::new(50, 50)]);

        let (positions, extent) = placement.into_parts();
        assert_eq!(positions.len(), 1);
        assert_eq!(extent, CanvasExtent::new(800, 600));
    }
}
