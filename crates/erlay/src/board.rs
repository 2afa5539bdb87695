//! A mutable diagram session.
//!
//! [`Board`] owns its nodes and edges and keeps the canvas size current as
//! they change. Nodes added without coordinates are placed by the
//! [`FlowPlacer`]; adding edges re-runs the configured layout strategy.

use log::debug;

use erlay_core::{
    geometry::{CanvasExtent, Position, Size},
    node::{Edge, HasGeometry, HasId, Node},
};

use crate::{
    LayoutError, Layouter,
    config::AppConfig,
    flow::FlowPlacer,
};

/// Nodes, edges and canvas of one diagram.
///
/// # Examples
///
/// ```
/// use erlay::{Board, config::AppConfig};
/// use erlay_core::{geometry::{Position, Size}, node::HasGeometry};
///
/// let mut board = Board::new(AppConfig::default());
/// board.add_node("users", Size::new(200, 120), None).expect("new node");
/// board.add_node("orders", Size::new(180, 100), Some(Position::new(400, 60))).expect("new node");
///
/// assert_eq!(board.node("users").map(|n| n.position()), Some(Position::new(50, 50)));
///
/// board.add_edge("orders", "users").expect("layout");
/// assert_eq!(board.edges().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    layouter: Layouter,
    flow: FlowPlacer,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    extent: CanvasExtent,
}

impl Board {
    /// Creates an empty board
    pub fn new(config: AppConfig) -> Self {
        let flow = FlowPlacer::new(config.flow(), config.canvas());
        let extent = config.canvas().minimum();
        Self {
            layouter: Layouter::new(config),
            flow,
            nodes: Vec::new(),
            edges: Vec::new(),
            extent,
        }
    }

    /// Adds a node and returns it.
    ///
    /// Without a `position` the node goes at the next flow position. The
    /// canvas is re-measured; no other node moves.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::DuplicateNode`] if the id is taken.
    /// - [`LayoutError::EmptySize`] if `size` has a zero dimension.
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        size: Size,
        position: Option<Position>,
    ) -> Result<&Node, LayoutError> {
        let id = id.into();
        if self.node(&id).is_some() {
            return Err(LayoutError::DuplicateNode { id });
        }
        if size.is_empty() {
            return Err(LayoutError::EmptySize {
                id,
                width: size.width(),
                height: size.height(),
            });
        }

        let position = position.unwrap_or_else(|| self.flow.next(size));
        debug!(id = id.as_str(), x = position.x(), y = position.y(); "Node added");

        self.nodes.push(Node::new(id, size).with_position(position));
        self.extent = self.layouter.adjust_canvas_size(&self.nodes);

        let index = self.nodes.len() - 1;
        Ok(&self.nodes[index])
    }

    /// Adds an edge and re-arranges the board.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the layout.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<CanvasExtent, LayoutError> {
        self.edges.push(Edge::new(source, target));
        self.arrange()
    }

    /// Adds several edges and re-arranges the board once.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the layout.
    pub fn add_edges(
        &mut self,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<CanvasExtent, LayoutError> {
        self.edges.extend(edges);
        self.arrange()
    }

    /// Moves a node and re-measures the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownNode`] if no node has this id.
    pub fn set_position(&mut self, id: &str, position: Position) -> Result<(), LayoutError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|node| node.id() == id)
            .ok_or_else(|| LayoutError::UnknownNode { id: id.to_string() })?;

        node.set_position(position);
        self.extent = self.layouter.adjust_canvas_size(&self.nodes);
        Ok(())
    }

    /// Lays the board out with the configured strategy, or only re-measures
    /// the canvas when there are no edges.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the layout.
    pub fn arrange(&mut self) -> Result<CanvasExtent, LayoutError> {
        self.extent = self.layouter.arrange(&mut self.nodes, &self.edges)?;
        Ok(self.extent)
    }

    /// Returns the node with the given id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Returns all nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns all edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the current canvas size
    pub fn extent(&self) -> CanvasExtent {
        self.extent
    }

    /// Returns the configuration in use
    pub fn config(&self) -> &AppConfig {
        self.layouter.config()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
