//! Graph model for Graphwalk.
//!
//! Algorithms never touch a concrete graph type. They are written against
//! [`GraphStore`], the small read-only capability the traversals need:
//! membership, degree, and neighbor enumeration in a stable order.

mod undirected;

pub use undirected::UndirectedGraph;

use graphwalk_common::types::NodeId;

/// Read-only access to an undirected graph.
///
/// Implementations must enumerate neighbors in a defined, repeatable order.
/// Traversal output is only reproducible if that order is.
pub trait GraphStore {
    /// Returns true if the node exists.
    fn has_node(&self, node: NodeId) -> bool;

    /// Returns the number of incident edges, or `None` for an unknown node.
    ///
    /// A self-loop contributes 2.
    fn degree(&self, node: NodeId) -> Option<usize>;

    /// Returns the neighbors of a node in the store's iteration order.
    ///
    /// Unknown nodes yield no neighbors.
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// Returns all nodes in the store's iteration order.
    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize;
}
