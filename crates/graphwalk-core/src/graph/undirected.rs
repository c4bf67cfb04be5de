//! Undirected graph store.

use graphwalk_common::types::NodeId;
use tracing::trace;

use super::GraphStore;
use crate::index::adjacency::OrderedAdjacency;

/// An in-memory undirected graph.
///
/// The graph is meant to be built once from an edge list and then queried.
/// Nodes are kept in the order they first appear and every node's neighbors
/// in the order their edges were first added, which fixes the visit order
/// of every traversal.
///
/// # Examples
///
/// ```
/// use graphwalk_core::{GraphStore, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_edges([(0u64, 1u64), (0, 2), (1, 2)]);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    adjacency: OrderedAdjacency,
}

impl UndirectedGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a sequence of edges.
    ///
    /// Duplicate edges, in either orientation, collapse into one.
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<NodeId>,
        B: Into<NodeId>,
    {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }

    /// Adds a node with no edges. Returns `false` if it already existed.
    pub fn add_node(&mut self, node: impl Into<NodeId>) -> bool {
        self.adjacency.add_node(node.into())
    }

    /// Adds the undirected edge `{a, b}`, creating missing endpoints.
    ///
    /// Returns `false` if the edge was already present.
    pub fn add_edge(&mut self, a: impl Into<NodeId>, b: impl Into<NodeId>) -> bool {
        let (a, b) = (a.into(), b.into());
        let added = self.adjacency.add_edge(a, b);
        if !added {
            trace!(%a, %b, "duplicate edge collapsed");
        }
        added
    }

    /// Adds every edge of the sequence.
    pub fn add_edges<I, A, B>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<NodeId>,
        B: Into<NodeId>,
    {
        for (a, b) in edges {
            self.add_edge(a, b);
        }
    }

    /// Returns true if the edge `{a, b}` exists.
    #[must_use]
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency.contains_edge(a, b)
    }

    /// Returns every undirected edge once.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.edges()
    }

    /// Returns the number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Returns the number of self-loops.
    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        self.adjacency.self_loop_count()
    }

    /// Returns the position of a node in insertion order.
    #[must_use]
    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.adjacency.position(node)
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.node_count() == 0
    }
}

impl GraphStore for UndirectedGraph {
    fn has_node(&self, node: NodeId) -> bool {
        self.adjacency.contains(node)
    }

    fn degree(&self, node: NodeId) -> Option<usize> {
        self.adjacency.degree(node)
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.neighbors(node)
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.nodes()
    }

    fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }
}

impl<A: Into<NodeId>, B: Into<NodeId>> FromIterator<(A, B)> for UndirectedGraph {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<A: Into<NodeId>, B: Into<NodeId>> Extend<(A, B)> for UndirectedGraph {
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, iter: I) {
        self.add_edges(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UndirectedGraph {
        UndirectedGraph::from_edges([(0u64, 1u64), (0, 2), (1, 3), (1, 4), (2, 5), (3, 4)])
    }

    #[test]
    fn test_from_edges() {
        let graph = sample();

        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 6);
        assert!(graph.has_node(NodeId::new(5)));
        assert!(!graph.has_node(NodeId::new(99)));
        assert!(graph.has_edge(NodeId::new(4), NodeId::new(3)));
    }

    #[test]
    fn test_nodes_in_first_seen_order() {
        let graph = sample();
        let nodes: Vec<u64> = graph.nodes().map(u64::from).collect();
        assert_eq!(nodes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_degree() {
        let graph = sample();
        assert_eq!(graph.degree(NodeId::new(1)), Some(3));
        assert_eq!(graph.degree(NodeId::new(5)), Some(1));
        assert_eq!(graph.degree(NodeId::new(99)), None);
    }

    #[test]
    fn test_neighbors() {
        let graph = sample();
        let neighbors: Vec<u64> = graph.neighbors(NodeId::new(1)).map(u64::from).collect();
        assert_eq!(neighbors, vec![0, 3, 4]);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut graph: UndirectedGraph = vec![(1u64, 2u64)].into_iter().collect();
        graph.extend([(2u64, 3u64), (2, 1)]);

        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.is_empty());
        assert!(UndirectedGraph::new().is_empty());
    }

    #[test]
    fn test_add_isolated_node() {
        let mut graph = sample();
        assert!(graph.add_node(10u64));
        assert_eq!(graph.degree(NodeId::new(10)), Some(0));
        assert_eq!(graph.neighbors(NodeId::new(10)).count(), 0);
        assert_eq!(graph.position(NodeId::new(10)), Some(6));
    }
}
