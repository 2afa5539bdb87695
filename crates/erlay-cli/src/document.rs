//! Graph documents read by the CLI and the layout report it writes.
//!
//! A graph document is TOML:
//!
//! ```toml
//! [[nodes]]
//! id = "users"
//! width = 200
//! height = 120
//!
//! [[nodes]]
//! id = "orders"
//! width = 180
//! height = 100
//! x = 400
//! y = 60
//!
//! [[edges]]
//! from = "orders"
//! to = "users"
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use erlay::{
    Board, Edge, StrategyKind,
    config::AppConfig,
    geometry::{Position, Size},
    node::{HasGeometry, HasId},
};

use crate::ErlayCliError;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeEntry {
    id: String,
    width: u32,
    height: u32,
    x: Option<i32>,
    y: Option<i32>,
}

impl NodeEntry {
    fn position(&self) -> Option<Position> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Position::new(x, y)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeEntry {
    from: String,
    to: String,
}

/// Nodes and relationships of one ER diagram.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    nodes: Vec<NodeEntry>,
    #[serde(default)]
    edges: Vec<EdgeEntry>,
}

impl GraphDocument {
    /// Parses a document, keeping the source around for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`ErlayCliError::Document`] with the failing span when the
    /// source is not a valid graph document.
    pub fn parse(path: impl AsRef<Path>, src: &str) -> Result<Self, ErlayCliError> {
        toml::from_str(src)
            .map_err(|err| ErlayCliError::new_document_error(path.as_ref(), &err, src))
    }

    /// Number of nodes in the document
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the document
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Loads the document into a fresh [`Board`] and arranges it.
    ///
    /// Nodes with both `x` and `y` keep those coordinates until the edges
    /// are added; the others get flow positions.
    ///
    /// # Errors
    ///
    /// Returns the first [`erlay::LayoutError`] raised by the board.
    pub fn into_board(self, config: AppConfig) -> Result<Board, ErlayCliError> {
        let mut board = Board::new(config);
        for entry in &self.nodes {
            board.add_node(
                entry.id.as_str(),
                Size::new(entry.width, entry.height),
                entry.position(),
            )?;
        }

        board.add_edges(self.edges.into_iter().map(|e| Edge::new(e.from, e.to)))?;
        debug!(nodes = board.nodes().len(), edges = board.edges().len(); "Board loaded");
        Ok(board)
    }
}

/// Placement of one node in a [`LayoutReport`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeReport {
    pub id: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Canvas section of a [`LayoutReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CanvasReport {
    pub width: u32,
    pub height: u32,
}

/// The file written by the CLI after a layout run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LayoutReport {
    pub strategy: StrategyKind,
    pub canvas: CanvasReport,
    pub nodes: Vec<NodeReport>,
}

impl LayoutReport {
    /// Captures the state of an arranged board
    pub fn from_board(board: &Board) -> Self {
        let extent = board.extent();
        let nodes = board
            .nodes()
            .iter()
            .map(|node| {
                let position = node.position();
                let size = node.size();
                NodeReport {
                    id: node.id().to_string(),
                    x: position.x(),
                    y: position.y(),
                    width: size.width(),
                    height: size.height(),
                }
            })
            .collect();

        Self {
            strategy: board.config().layout().strategy(),
            canvas: CanvasReport {
                width: extent.width(),
                height: extent.height(),
            },
            nodes,
        }
    }

    /// Serializes the report as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ErlayCliError::Report`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ErlayCliError> {
        toml::to_string(self).map_err(|err| ErlayCliError::Report(err.to_string()))
    }
}
