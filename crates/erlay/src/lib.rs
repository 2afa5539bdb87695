//! erlay - A layout engine for entity-relationship diagrams.
//!
//! erlay positions sized rectangular nodes and the references between them
//! on a 2D canvas. It computes non-overlapping top-left pixel positions and a
//! canvas size that any renderer (SVG, draw.io, ...) can consume. It never
//! draws anything and never inspects what a node represents.
//!
//! Callers lay out their own node types by implementing the adapter traits
//! from [`erlay_core::node`], or use the ready-made [`Node`] and [`Edge`].
//!
//! # Examples
//!
//! ```
//! use erlay::{Edge, Node, config::AppConfig};
//! use erlay_core::{geometry::Size, node::HasGeometry};
//!
//! let mut nodes = vec![
//!     Node::new("users", Size::new(200, 120)),
//!     Node::new("orders", Size::new(180, 100)),
//! ];
//! let edges = vec![Edge::new("orders", "users")];
//!
//! let extent = erlay::layout(&mut nodes, &edges, &AppConfig::default()).expect("valid input");
//! assert!(extent.width() >= 800);
//! assert!(nodes.iter().all(|node| node.position().is_non_negative()));
//! ```

pub mod board;
pub mod canvas;
pub mod config;
pub mod flow;
pub mod graph;
pub mod layout;
pub mod overlap;

mod error;

pub use erlay_core::{geometry, node};
pub use erlay_core::{Edge, Node};

pub use board::Board;
pub use canvas::adjust_canvas_size;
pub use error::LayoutError;
pub use layout::{LayoutStrategy, Placement, StrategyKind};

use log::{debug, info, trace};

use erlay_core::{
    geometry::CanvasExtent,
    node::{HasEndpoints, HasGeometry, HasId},
};

use config::AppConfig;
use graph::LayoutGraph;
use layout::EngineBuilder;

/// Lays out `nodes` in place and returns the canvas size.
///
/// The strategy and all tuning come from `config`. Edges naming unknown
/// nodes are ignored. On error no node is moved.
///
/// # Errors
///
/// - [`LayoutError::InvalidConfig`] if `config` fails validation.
/// - [`LayoutError::DuplicateNode`] if two nodes share an id.
/// - [`LayoutError::EmptySize`] if a node has zero width or height.
pub fn layout<N, E>(
    nodes: &mut [N],
    edges: &[E],
    config: &AppConfig,
) -> Result<CanvasExtent, LayoutError>
where
    N: HasId + HasGeometry,
    E: HasEndpoints,
{
    Layouter::new(config.clone()).layout(nodes, edges)
}

/// Entry point for laying out diagrams with a fixed configuration.
///
/// # Examples
///
/// ```
/// use erlay::{Edge, Layouter, Node, StrategyKind, config::{AppConfig, LayoutConfig}};
/// use erlay_core::geometry::Size;
///
/// let config = AppConfig::default()
///     .with_layout(LayoutConfig::default().with_strategy(StrategyKind::Hierarchical));
/// let layouter = Layouter::new(config);
///
/// let mut nodes = vec![Node::new("a", Size::new(100, 50))];
/// let extent = layouter.layout(&mut nodes, &[] as &[Edge]).expect("valid input");
/// assert_eq!(extent.width(), 800);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Layouter {
    config: AppConfig,
}

impl Layouter {
    /// Create a new layouter with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lays out `nodes` in place with the configured strategy and returns
    /// the canvas size.
    ///
    /// # Errors
    ///
    /// See [`layout`].
    pub fn layout<N, E>(&self, nodes: &mut [N], edges: &[E]) -> Result<CanvasExtent, LayoutError>
    where
        N: HasId + HasGeometry,
        E: HasEndpoints,
    {
        self.config.validate()?;

        let strategy = self.config.layout().strategy();
        info!(
            strategy:% = strategy,
            nodes = nodes.len(),
            edges = edges.len();
            "Laying out diagram"
        );

        let placement = {
            let graph = LayoutGraph::new(&*nodes, edges)?;
            debug!(resolved_edges = graph.edges().len(); "Graph indexed");

            let mut engines = EngineBuilder::from_config(&self.config);
            engines.engine(strategy).place(&graph)
        };

        let (positions, extent) = placement.into_parts();
        for (node, position) in nodes.iter_mut().zip(positions) {
            trace!(id = node.id(), x = position.x(), y = position.y(); "Node placed");
            node.set_position(position);
        }

        info!(width = extent.width(), height = extent.height(); "Layout calculated");
        Ok(extent)
    }

    /// Recomputes the canvas size from the current node positions without
    /// moving any node.
    pub fn adjust_canvas_size<N: HasGeometry>(&self, nodes: &[N]) -> CanvasExtent {
        canvas::adjust_canvas_size(nodes, self.config.canvas())
    }

    /// Lays out `nodes` if there is at least one edge, otherwise only
    /// re-measures the canvas around their current positions.
    ///
    /// # Errors
    ///
    /// See [`layout`].
    pub fn arrange<N, E>(&self, nodes: &mut [N], edges: &[E]) -> Result<CanvasExtent, LayoutError>
    where
        N: HasId + HasGeometry,
        E: HasEndpoints,
    {
        if edges.is_empty() {
            debug!("No edges, keeping current positions");
            return Ok(self.adjust_canvas_size(nodes));
        }
        self.layout(nodes, edges)
    }
}
