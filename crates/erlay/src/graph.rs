//! Index-based view of the nodes and edges handed to a layout call.
//!
//! [`LayoutGraph`] validates the caller's nodes once and resolves every edge
//! endpoint to an index into the node slice. Strategies work on indices only,
//! which keeps them independent of the caller's node type and lets the final
//! positions be written back in input order.
//!
//! [`AdjacencyIndex`] is the derived neighbour and degree table the
//! force-directed strategy needs. It is rebuilt on every call and never stored.

use indexmap::{IndexMap, IndexSet};
use log::trace;

use erlay_core::{
    geometry::Size,
    node::{HasEndpoints, HasGeometry, HasId},
};

use crate::error::LayoutError;

/// Validated snapshot of the nodes and edges of one layout call.
#[derive(Debug, Clone)]
pub struct LayoutGraph<'a> {
    nodes: IndexMap<&'a str, Size>,
    edges: Vec<(usize, usize)>,
}

impl<'a> LayoutGraph<'a> {
    /// Builds the graph from the caller's nodes and edges.
    ///
    /// Edges naming an unknown node are dropped. They are not an error.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::DuplicateNode`] if two nodes share an id.
    /// - [`LayoutError::EmptySize`] if a node has zero width or height.
    pub fn new<N, E>(nodes: &'a [N], edges: &[E]) -> Result<Self, LayoutError>
    where
        N: HasId + HasGeometry,
        E: HasEndpoints,
    {
        let mut index = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            let size = node.size();
            if size.is_empty() {
                return Err(LayoutError::EmptySize {
                    id: node.id().to_string(),
                    width: size.width(),
                    height: size.height(),
                });
            }
            if index.insert(node.id(), size).is_some() {
                return Err(LayoutError::DuplicateNode {
                    id: node.id().to_string(),
                });
            }
        }

        let edges = edges
            .iter()
            .filter_map(|edge| {
                let source = index.get_index_of(edge.source());
                let target = index.get_index_of(edge.target());
                match (source, target) {
                    (Some(source), Some(target)) => Some((source, target)),
                    _ => {
                        trace!(
                            source = edge.source(),
                            target = edge.target();
                            "Dropping edge with unknown endpoint"
                        );
                        None
                    }
                }
            })
            .collect();

        Ok(Self {
            nodes: index,
            edges,
        })
    }

    /// Returns the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the id of the node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn id(&self, index: usize) -> &'a str {
        self.nodes
            .get_index(index)
            .map(|(id, _)| *id)
            .unwrap_or_else(|| panic!("node index {index} out of bounds"))
    }

    /// Returns the size of the node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn size(&self, index: usize) -> Size {
        self.nodes[index]
    }

    /// Returns the index of the node with the given id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    /// Returns the node sizes in input order
    pub fn sizes(&self) -> impl ExactSizeIterator<Item = Size> + '_ {
        self.nodes.values().copied()
    }

    /// Returns the resolved edges as `(source, target)` index pairs in input order
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Builds the neighbour and degree table of this graph
    pub fn adjacency(&self) -> AdjacencyIndex {
        AdjacencyIndex::new(self.len(), &self.edges)
    }
}

/// Neighbour sets and degrees of every node, indexed like the node slice.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    neighbors: Vec<IndexSet<usize>>,
    degree: Vec<usize>,
}

impl AdjacencyIndex {
    /// Builds the table for `len` nodes.
    ///
    /// Every edge adds one to the degree of each endpoint, so a self-edge
    /// adds two. A self-edge adds no neighbour.
    pub fn new(len: usize, edges: &[(usize, usize)]) -> Self {
        let mut neighbors = vec![IndexSet::new(); len];
        let mut degree = vec![0; len];

        for &(source, target) in edges {
            degree[source] += 1;
            degree[target] += 1;
            if source != target {
                neighbors[source].insert(target);
                neighbors[target].insert(source);
            }
        }

        Self { neighbors, degree }
    }

    /// Returns the distinct neighbours of `node` in first-seen order
    pub fn neighbors(&self, node: usize) -> &IndexSet<usize> {
        &self.neighbors[node]
    }

    /// Returns the number of edge endpoints at `node`
    pub fn degree(&self, node: usize) -> usize {
        self.degree[node]
    }

    /// Returns the nodes with at least one edge, in input order
    pub fn connected(&self) -> Vec<usize> {
        (0..self.degree.len())
            .filter(|&node| self.degree[node] > 0)
            .collect()
    }

    /// Returns the nodes without edges, in input order
    pub fn isolated(&self) -> Vec<usize> {
        (0..self.degree.len())
            .filter(|&node| self.degree[node] == 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use erlay_core::node::{Edge, Node};

    use super::*;

    fn node(id: &str) -> Node {
        Node::new(id, Size::new(100, 60))
    }

    #[test]
    fn test_resolves_edges_in_order() {
        let nodes = vec![node("a"), node("b"), node("c")];
        let edges = vec![Edge::new("c", "a"), Edge::new("a", "b")];

        let graph = LayoutGraph::new(&nodes, &edges).expect("valid graph");
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edges(), &[(2, 0), (0, 1)]);
        assert_eq!(graph.id(2), "c");
        assert_eq!(graph.index_of("b"), Some(1));
        assert_eq!(graph.index_of("missing"), None);
    }

    #[test]
    fn test_drops_unknown_endpoints() {
        let nodes = vec![node("a"), node("b")];
        let edges = vec![("a", "ghost"), ("ghost", "b"), ("a", "b")];

        let graph = LayoutGraph::new(&nodes, &edges).expect("valid graph");
        assert_eq!(graph.edges(), &[(0, 1)]);
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let nodes = vec![node("a"), node("b"), node("a")];
        let err = LayoutGraph::new(&nodes, &[] as &[Edge]).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateNode { id } if id == "a"));
    }

    #[test]
    fn test_rejects_empty_size() {
        let nodes = vec![node("a"), Node::new("flat", Size::new(120, 0))];
        let err = LayoutGraph::new(&nodes, &[] as &[Edge]).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::EmptySize { id, width: 120, height: 0 } if id == "flat"
        ));
    }

    #[test]
    fn test_adjacency_degree_and_neighbors() {
        let nodes = vec![node("a"), node("b"), node("c"), node("d")];
        let edges = vec![("a", "b"), ("a", "c"), ("b", "a")];

        let adjacency = LayoutGraph::new(&nodes, &edges)
            .expect("valid graph")
            .adjacency();

        assert_eq!(adjacency.degree(0), 3);
        assert_eq!(adjacency.degree(1), 2);
        assert_eq!(adjacency.degree(2), 1);
        assert_eq!(adjacency.degree(3), 0);
        assert_eq!(
            adjacency.neighbors(0).iter().copied().collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(adjacency.connected(), vec![0, 1, 2]);
        assert_eq!(adjacency.isolated(), vec![3]);
    }

    #[test]
    fn test_self_edge_counts_twice_without_neighbor() {
        let adjacency = AdjacencyIndex::new(2, &[(0, 0)]);

        assert_eq!(adjacency.degree(0), 2);
        assert!(adjacency.neighbors(0).is_empty());
        assert_eq!(adjacency.connected(), vec![0]);
        assert_eq!(adjacency.isolated(), vec![1]);
    }
}
