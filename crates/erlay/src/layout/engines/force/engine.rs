//! Force-directed strategy pipeline.

use log::{debug, info, warn};

use erlay_core::geometry::{Point, Size};

use super::{placement, simulation::Simulation};
use crate::{
    canvas,
    config::{CanvasConfig, ForceConfig, OverlapConfig},
    graph::LayoutGraph,
    layout::{LayoutStrategy, Placement},
    overlap::{PIXEL_SNAP_ALLOWANCE, has_overlap, resolve_overlaps},
};

/// Force-directed layout engine.
///
/// The pipeline runs in a fixed order:
///
/// 1. Seed the connected nodes, most connected first.
/// 2. Relax them with the force simulation.
/// 3. Remove overlaps among them.
/// 4. Stack the isolated nodes to the right of the cluster.
/// 5. Remove overlaps among all nodes.
/// 6. Translate to the margin, snap to pixels and size the canvas.
///
/// When no node has an edge, steps 1 to 4 are replaced by a grid.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    force: ForceConfig,
    overlap: OverlapConfig,
    canvas: CanvasConfig,
}

impl Engine {
    /// Create a new force-directed engine with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the force simulation parameters
    pub fn set_force(&mut self, force: ForceConfig) -> &mut Self {
        self.force = force;
        self
    }

    /// Set the overlap resolver parameters
    pub fn set_overlap(&mut self, overlap: OverlapConfig) -> &mut Self {
        self.overlap = overlap;
        self
    }

    /// Set the canvas margin and minimum size
    pub fn set_canvas(&mut self, canvas: CanvasConfig) -> &mut Self {
        self.canvas = canvas;
        self
    }

    /// Computes the centre of every node, before translation to the margin.
    fn compute_centers(&self, graph: &LayoutGraph<'_>, sizes: &[Size]) -> Vec<Point> {
        let adjacency = graph.adjacency();
        let ideal = placement::ideal_length(sizes, self.force.ideal_length_factor());
        let margin = f64::from(self.canvas.margin());
        let gap = f64::from(self.overlap.min_gap()) + PIXEL_SNAP_ALLOWANCE;
        let max_passes = self.overlap.max_passes();

        let connected = adjacency.connected();
        let isolated = adjacency.isolated();
        let mut centers = vec![Point::default(); graph.len()];

        debug!(
            connected = connected.len(),
            isolated = isolated.len(),
            ideal_length = ideal;
            "Starting force-directed placement"
        );

        let order = if connected.is_empty() {
            let all: Vec<usize> = (0..graph.len()).collect();
            placement::place_grid(&mut centers, &all, ideal, margin);
            all
        } else {
            let ranked = placement::rank_by_degree(&connected, &adjacency);
            placement::place_connected(&mut centers, &ranked, &adjacency, ideal, margin);

            Simulation::new(&self.force, ideal).run(&mut centers, &ranked, graph.edges());
            resolve_overlaps(&mut centers, sizes, &ranked, gap, max_passes);

            placement::place_isolated(&mut centers, &ranked, &isolated, ideal);

            let mut order = ranked;
            order.extend(isolated);
            order
        };

        let resolution = resolve_overlaps(&mut centers, sizes, &order, gap, max_passes);
        if !resolution.settled() && has_overlap(&centers, sizes, &order, gap) {
            warn!(passes = resolution.passes(); "Overlaps remain after the pass budget");
        }

        centers
    }
}

impl LayoutStrategy for Engine {
    fn place(&self, graph: &LayoutGraph<'_>) -> Placement {
        if graph.is_empty() {
            return Placement::new(Vec::new(), self.canvas.minimum());
        }

        let sizes: Vec<Size> = graph.sizes().collect();
        let centers = self.compute_centers(graph, &sizes);

        let positions = canvas::normalize(&centers, &sizes, self.canvas.margin());
        let extent = canvas::fit_extent(
            positions.iter().copied().zip(sizes.iter().copied()),
            &self.canvas,
        );

        info!(
            nodes = graph.len(),
            edges = graph.edges().len(),
            width = extent.width(),
            height = extent.height();
            "Force-directed layout complete"
        );

        Placement::new(positions, extent)
    }
}

#[cfg(test)]
mod tests {
    use erlay_core::{
        geometry::{CanvasExtent, Position},
        node::{Edge, HasGeometry, Node},
    };

    use super::*;

    #[test]
    fn test_empty_graph_uses_minimum() {
        let nodes: Vec<Node> = Vec::new();
        let graph = LayoutGraph::new(&nodes, &[] as &[Edge]).expect("valid graph");

        let placement = Engine::new().place(&graph);

        assert!(placement.positions().is_empty());
        assert_eq!(placement.extent(), CanvasExtent::new(800, 600));
    }

    #[test]
    fn test_single_node_sits_at_margin() {
        let nodes = vec![Node::new("only", Size::new(900, 100))];
        let graph = LayoutGraph::new(&nodes, &[] as &[Edge]).expect("valid graph");

        let placement = Engine::new().place(&graph);

        assert_eq!(placement.positions(), &[Position::new(50, 50)]);
        assert_eq!(placement.extent(), CanvasExtent::new(1000, 600));
    }

    #[test]
    fn test_isolated_nodes_right_of_cluster() {
        let nodes = vec![
            Node::new("a", Size::new(200, 100)),
            Node::new("b", Size::new(200, 100)),
            Node::new("c", Size::new(200, 100)),
            Node::new("d", Size::new(200, 100)),
        ];
        let edges = vec![Edge::new("a", "b"), Edge::new("b", "c")];
        let graph = LayoutGraph::new(&nodes, &edges).expect("valid graph");

        let placement = Engine::new().place(&graph);
        let positions = placement.positions();

        let cluster_right = positions[..3].iter().map(|p| p.x()).max().unwrap_or(0);
        assert!(positions[3].x() >= cluster_right + 200);
    }

    #[test]
    fn test_tight_pass_budget_still_places_every_node() {
        let nodes = vec![
            Node::new("a", Size::new(300, 200)),
            Node::new("b", Size::new(300, 200)),
            Node::new("c", Size::new(300, 200)),
            Node::new("d", Size::new(300, 200)),
        ];
        let edges = vec![Edge::new("a", "b"), Edge::new("a", "c"), Edge::new("a", "d")];
        let graph = LayoutGraph::new(&nodes, &edges).expect("valid graph");

        let mut engine = Engine::new();
        engine.set_overlap(OverlapConfig::default().with_max_passes(1));
        let placement = engine.place(&graph);

        assert_eq!(placement.positions().len(), 4);
        assert!(
            placement
                .positions()
                .iter()
                .zip(&nodes)
                .all(|(p, n)| placement.extent().contains(*p, n.size()))
        );
    }

    #[test]
    fn test_self_loop_only_node() {
        let nodes = vec![
            Node::new("tree", Size::new(150, 80)),
            Node::new("leaf", Size::new(150, 80)),
        ];
        let edges = vec![Edge::new("tree", "tree")];
        let graph = LayoutGraph::new(&nodes, &edges).expect("valid graph");

        let placement = Engine::new().place(&graph);

        assert_eq!(placement.positions().len(), 2);
        assert!(placement.positions().iter().all(|p| p.is_non_negative()));
    }
}
