//! Insertion-ordered adjacency lists.
//!
//! This is the primary edge storage structure, optimized for:
//! - O(1) amortized edge insertion and membership tests
//! - Deterministic neighbor iteration (first-insertion order)
//! - Collapsing duplicate and reversed edges into one undirected edge

use ahash::RandomState;
use graphwalk_common::types::NodeId;
use indexmap::{IndexMap, IndexSet};

/// Neighbors of a single node, in the order their edges were first added.
type NeighborSet = IndexSet<NodeId, RandomState>;

/// Undirected adjacency lists that remember insertion order.
///
/// Every edge `{a, b}` is recorded in both `a`'s and `b`'s list. A self-loop
/// `{a, a}` is recorded once in `a`'s list.
#[derive(Debug, Clone, Default)]
pub struct OrderedAdjacency {
    /// Adjacency lists indexed by node, in node insertion order.
    lists: IndexMap<NodeId, NeighborSet, RandomState>,
    /// Number of distinct undirected edges.
    edge_count: usize,
    /// Number of self-loops among those edges.
    self_loop_count: usize,
}

impl OrderedAdjacency {
    /// Creates an empty adjacency structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty adjacency structure sized for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            lists: IndexMap::with_capacity_and_hasher(nodes, RandomState::new()),
            edge_count: 0,
            self_loop_count: 0,
        }
    }

    /// Adds a node with no edges. Returns `false` if it already existed.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.lists.contains_key(&node) {
            return false;
        }
        self.lists.insert(node, NeighborSet::default());
        true
    }

    /// Adds the undirected edge `{a, b}`, creating missing endpoints.
    ///
    /// Returns `false` if the edge was already present (in either
    /// orientation).
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        // Endpoints are registered in argument order so node order follows
        // the edge list.
        self.add_node(a);
        self.add_node(b);

        let inserted = self.lists.get_mut(&a).is_some_and(|list| list.insert(b));
        if !inserted {
            return false;
        }

        if a == b {
            self.self_loop_count += 1;
        } else if let Some(list) = self.lists.get_mut(&b) {
            list.insert(a);
        }
        self.edge_count += 1;
        true
    }

    /// Returns true if the node exists.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.lists.contains_key(&node)
    }

    /// Returns true if the edge `{a, b}` exists.
    #[must_use]
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.lists.get(&a).is_some_and(|list| list.contains(&b))
    }

    /// Returns an iterator over the neighbors of a node.
    ///
    /// Unknown nodes yield an empty iterator; callers that care check
    /// [`contains`](Self::contains) first.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.lists
            .get(&node)
            .into_iter()
            .flat_map(|list| list.iter().copied())
    }

    /// Returns the degree of a node, counting a self-loop twice.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> Option<usize> {
        let list = self.lists.get(&node)?;
        let loops = usize::from(list.contains(&node));
        Some(list.len() + loops)
    }

    /// Returns the position of a node in insertion order.
    #[must_use]
    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.lists.get_index_of(&node)
    }

    /// Returns all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.lists.keys().copied()
    }

    /// Returns every undirected edge exactly once.
    ///
    /// Edges are grouped by the endpoint that was inserted first, and within
    /// a group follow that endpoint's neighbor order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.lists
            .iter()
            .enumerate()
            .flat_map(move |(pos, (&a, list))| {
                list.iter().filter_map(move |&b| {
                    let other = self.lists.get_index_of(&b)?;
                    (other >= pos).then_some((a, b))
                })
            })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    /// Returns the number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the number of self-loops.
    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        self.self_loop_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_add_edge_both_directions() {
        let mut adj = OrderedAdjacency::new();
        assert!(adj.add_edge(n(0), n(1)));

        assert!(adj.contains_edge(n(0), n(1)));
        assert!(adj.contains_edge(n(1), n(0)));
        assert_eq!(adj.edge_count(), 1);
        assert_eq!(adj.node_count(), 2);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let mut adj = OrderedAdjacency::new();
        assert!(adj.add_edge(n(0), n(1)));
        assert!(!adj.add_edge(n(0), n(1)));
        assert!(!adj.add_edge(n(1), n(0)));

        assert_eq!(adj.edge_count(), 1);
        assert_eq!(adj.degree(n(0)), Some(1));
        assert_eq!(adj.degree(n(1)), Some(1));
    }

    #[test]
    fn test_neighbor_order_is_insertion_order() {
        let mut adj = OrderedAdjacency::new();
        adj.add_edge(n(5), n(3));
        adj.add_edge(n(5), n(9));
        adj.add_edge(n(1), n(5));

        let neighbors: Vec<_> = adj.neighbors(n(5)).collect();
        assert_eq!(neighbors, vec![n(3), n(9), n(1)]);
    }

    #[test]
    fn test_self_loop_degree() {
        let mut adj = OrderedAdjacency::new();
        adj.add_edge(n(2), n(2));
        adj.add_edge(n(2), n(3));

        assert_eq!(adj.degree(n(2)), Some(3));
        assert_eq!(adj.self_loop_count(), 1);
        assert_eq!(adj.edge_count(), 2);
        assert!(!adj.add_edge(n(2), n(2)));
    }

    #[test]
    fn test_unknown_node() {
        let adj = OrderedAdjacency::new();
        assert!(!adj.contains(n(4)));
        assert_eq!(adj.degree(n(4)), None);
        assert_eq!(adj.neighbors(n(4)).count(), 0);
    }

    #[test]
    fn test_edges_listed_once() {
        let mut adj = OrderedAdjacency::new();
        adj.add_edge(n(0), n(1));
        adj.add_edge(n(0), n(2));
        adj.add_edge(n(1), n(2));
        adj.add_edge(n(2), n(2));

        let edges: Vec<_> = adj.edges().collect();
        assert_eq!(
            edges,
            vec![(n(0), n(1)), (n(0), n(2)), (n(1), n(2)), (n(2), n(2))]
        );
    }

    #[test]
    fn test_isolated_node() {
        let mut adj = OrderedAdjacency::with_capacity(4);
        assert!(adj.add_node(n(7)));
        assert!(!adj.add_node(n(7)));
        assert_eq!(adj.degree(n(7)), Some(0));
        assert_eq!(adj.position(n(7)), Some(0));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn degree_sum_is_twice_edge_count(
                edges in prop::collection::vec((0u64..30, 0u64..30), 0..120)
            ) {
                let mut adj = OrderedAdjacency::new();
                for (a, b) in &edges {
                    adj.add_edge(n(*a), n(*b));
                }

                let degree_sum: usize = adj.nodes().filter_map(|v| adj.degree(v)).sum();
                prop_assert_eq!(degree_sum, 2 * adj.edge_count());
                prop_assert_eq!(adj.edges().count(), adj.edge_count());
            }

            #[test]
            fn adjacency_is_symmetric(
                edges in prop::collection::vec((0u64..20, 0u64..20), 0..80)
            ) {
                let mut adj = OrderedAdjacency::new();
                for (a, b) in &edges {
                    adj.add_edge(n(*a), n(*b));
                }

                for v in adj.nodes() {
                    for w in adj.neighbors(v) {
                        prop_assert!(adj.contains_edge(w, v));
                    }
                }
            }
        }
    }
}
