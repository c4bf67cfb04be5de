//! Unweighted shortest paths.
//!
//! Every edge costs one hop, so a breadth-first search from the source
//! settles nodes in order of distance. The first time the target is reached
//! the predecessor chain is a shortest path.

use std::collections::VecDeque;

use graphwalk_common::types::NodeId;
use graphwalk_common::utils::error::Result;
use graphwalk_common::utils::hash::FastHashMap;
use graphwalk_core::GraphStore;
use tracing::debug;

use super::ensure_node;

/// Returns the nodes of a shortest path from `source` to `target`.
///
/// When several shortest paths exist, the one found first in neighbor order
/// wins. An empty vector means the target is not reachable; that is not an
/// error. `source == target` yields `[source]`.
///
/// # Errors
///
/// Returns `NodeNotFound` naming `source` or `target` (checked in that
/// order) if it is not in the graph.
pub fn shortest_path<G: GraphStore>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> Result<Vec<NodeId>> {
    ensure_node(graph, source, "shortest_path")?;
    ensure_node(graph, target, "shortest_path")?;

    let path = search(graph, source, target);
    debug!(
        %source,
        %target,
        hops = path.len().saturating_sub(1),
        found = !path.is_empty(),
        "shortest path"
    );
    Ok(path)
}

/// Returns the number of edges on a shortest path, or `None` if `target` is
/// unreachable.
///
/// # Errors
///
/// Returns `NodeNotFound` if either node is not in the graph.
pub fn shortest_path_length<G: GraphStore>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> Result<Option<usize>> {
    let path = shortest_path(graph, source, target)?;
    Ok(path.len().checked_sub(1))
}

fn search<G: GraphStore>(graph: &G, source: NodeId, target: NodeId) -> Vec<NodeId> {
    if source == target {
        return vec![source];
    }

    // Predecessor of every reached node; the source maps to itself.
    let mut predecessors: FastHashMap<NodeId, NodeId> = FastHashMap::default();
    predecessors.insert(source, source);
    let mut queue = VecDeque::from([source]);

    while let Some(node) = queue.pop_front() {
        for neighbor in graph.neighbors(node) {
            if predecessors.contains_key(&neighbor) {
                continue;
            }
            predecessors.insert(neighbor, node);
            if neighbor == target {
                return unwind(&predecessors, source, target);
            }
            queue.push_back(neighbor);
        }
    }

    Vec::new()
}

fn unwind(
    predecessors: &FastHashMap<NodeId, NodeId>,
    source: NodeId,
    target: NodeId,
) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        current = predecessors[&current];
        path.push(current);
    }
    path.reverse();
    path
}
