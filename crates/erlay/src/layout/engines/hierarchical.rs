//! Hierarchical layout engine
//!
//! Nodes are grouped into levels by reference direction: level 0 holds the
//! nodes that reference nothing, level 1 the nodes that only reference level
//! 0, and so on. Levels are laid out as columns from left to right. Inside
//! the columns, a node's first unplaced partner goes to its right and further
//! partners stack below it, so related tables end up side by side.

use log::{debug, info, trace};
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use erlay_core::geometry::{Position, Size};

use crate::{
    canvas,
    config::CanvasConfig,
    graph::LayoutGraph,
    layout::{LayoutStrategy, Placement},
};

/// Hierarchical layout engine.
#[derive(Debug, Clone)]
pub struct Engine {
    level_pitch: u32,
    node_spacing: u32,
    canvas: CanvasConfig,
}

impl Engine {
    /// Create a new hierarchical engine with default spacing
    pub fn new() -> Self {
        Self {
            level_pitch: 350,
            node_spacing: 50,
            canvas: CanvasConfig::default(),
        }
    }

    /// Set the horizontal distance between consecutive levels
    pub fn set_level_pitch(&mut self, pitch: u32) -> &mut Self {
        self.level_pitch = pitch;
        self
    }

    /// Set the space between a node and the partners placed next to it
    pub fn set_node_spacing(&mut self, spacing: u32) -> &mut Self {
        self.node_spacing = spacing;
        self
    }

    /// Set the canvas margin and minimum size
    pub fn set_canvas(&mut self, canvas: CanvasConfig) -> &mut Self {
        self.canvas = canvas;
        self
    }

    /// Places the nodes level by level.
    fn arrange(&self, graph: &LayoutGraph<'_>, levels: &[Vec<usize>]) -> Vec<Position> {
        let margin = i64::from(self.canvas.margin());
        let spacing = i64::from(self.node_spacing);
        let mut positions: Vec<Option<Position>> = vec![None; graph.len()];
        let mut cursor = margin;

        for (level, members) in levels.iter().enumerate() {
            let x = margin + level as i64 * i64::from(self.level_pitch);

            for &node in members {
                if positions[node].is_some() {
                    continue;
                }

                let size = graph.size(node);
                positions[node] = Some(pixel(x, cursor));

                let mut row_y = cursor;
                let mut row_height = i64::from(size.height());
                let mut partners = 0usize;

                for partner in partners_of(graph, node) {
                    if positions[partner].is_some() {
                        continue;
                    }

                    let partner_size = graph.size(partner);
                    if partners == 0 {
                        positions[partner] =
                            Some(pixel(x + i64::from(size.width()) + spacing, row_y));
                        row_height = row_height.max(i64::from(partner_size.height()));
                    } else {
                        row_y += row_height + spacing;
                        positions[partner] = Some(pixel(x, row_y));
                        row_height = i64::from(partner_size.height());
                    }
                    partners += 1;
                }

                trace!(node = graph.id(node), level, partners; "Placed row");
                cursor = row_y + row_height + spacing;
            }
        }

        positions.into_iter().map(Option::unwrap_or_default).collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStrategy for Engine {
    fn place(&self, graph: &LayoutGraph<'_>) -> Placement {
        if graph.is_empty() {
            return Placement::new(Vec::new(), self.canvas.minimum());
        }

        let levels = build_levels(graph);
        debug!(levels = levels.len(); "Built reference levels");

        let positions = self.arrange(graph, &levels);
        let sizes: Vec<Size> = graph.sizes().collect();
        let extent = canvas::fit_extent(
            positions.iter().copied().zip(sizes.iter().copied()),
            &self.canvas,
        );

        info!(
            nodes = graph.len(),
            levels = levels.len(),
            width = extent.width(),
            height = extent.height();
            "Hierarchical layout complete"
        );

        Placement::new(positions, extent)
    }
}

/// Groups nodes into levels by peeling off nodes that reference nothing
/// outside the levels already built.
///
/// Out-degrees count every edge between two distinct nodes; self-edges are
/// ignored. Each level lists its nodes in input order. When no remaining
/// node qualifies, every remaining node forms the next level, so the result
/// is finite even on cyclic references.
pub fn build_levels(graph: &LayoutGraph<'_>) -> Vec<Vec<usize>> {
    let mut references: DiGraph<usize, ()> =
        DiGraph::with_capacity(graph.len(), graph.edges().len());
    let indices: Vec<NodeIndex> = (0..graph.len())
        .map(|node| references.add_node(node))
        .collect();
    for &(source, target) in graph.edges() {
        if source != target {
            references.add_edge(indices[source], indices[target], ());
        }
    }

    let mut out_degree: Vec<usize> = indices
        .iter()
        .map(|&idx| references.edges_directed(idx, Direction::Outgoing).count())
        .collect();
    let mut remaining = vec![true; graph.len()];
    let mut left = graph.len();
    let mut levels = Vec::new();

    while left > 0 {
        let mut level: Vec<usize> = (0..graph.len())
            .filter(|&node| remaining[node] && out_degree[node] == 0)
            .collect();

        if level.is_empty() {
            trace!(remaining = left; "Reference cycle, flushing remaining nodes");
            level = (0..graph.len()).filter(|&node| remaining[node]).collect();
        }

        for &node in &level {
            remaining[node] = false;
        }
        left -= level.len();

        for &node in &level {
            for edge in references.edges_directed(indices[node], Direction::Incoming) {
                let source = references[edge.source()];
                if remaining[source] {
                    out_degree[source] -= 1;
                }
            }
        }

        levels.push(level);
    }

    levels
}

/// Returns the other endpoint of every edge touching `node`, in edge order.
fn partners_of<'g>(graph: &'g LayoutGraph<'_>, node: usize) -> impl Iterator<Item = usize> + 'g {
    graph
        .edges()
        .iter()
        .filter_map(move |&(source, target)| {
            if source == node {
                Some(target)
            } else if target == node {
                Some(source)
            } else {
                None
            }
        })
}

fn pixel(x: i64, y: i64) -> Position {
    let clamp = |v: i64| i32::try_from(v).unwrap_or(i32::MAX);
    Position::new(clamp(x), clamp(y))
}
