//! Degree lookup.

use graphwalk_common::types::NodeId;
use graphwalk_common::utils::error::{Error, Result};
use graphwalk_core::GraphStore;

/// Returns the number of edges incident to `node`.
///
/// A self-loop contributes 2.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if the node is not in the graph.
pub fn degree<G: GraphStore>(graph: &G, node: NodeId) -> Result<usize> {
    graph
        .degree(node)
        .ok_or_else(|| Error::node_not_found(node, "degree"))
}

/// Returns the degree of every node, in the graph's node order.
pub fn degrees<G: GraphStore>(graph: &G) -> Vec<(NodeId, usize)> {
    graph
        .nodes()
        .map(|node| (node, graph.degree(node).unwrap_or(0)))
        .collect()
}
