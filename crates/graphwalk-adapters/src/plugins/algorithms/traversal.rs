//! Depth-first and breadth-first traversal.
//!
//! Both traversals visit neighbors in the order the [`GraphStore`] yields
//! them, so the visit order is fully determined by the graph's edge
//! insertion order.

use std::collections::VecDeque;

use graphwalk_common::types::NodeId;
use graphwalk_common::utils::error::Result;
use graphwalk_common::utils::hash::FastHashSet;
use graphwalk_core::GraphStore;
use tracing::debug;

use super::ensure_node;
use super::traits::{Control, TraversalEvent};

/// Returns the nodes reachable from `start` in depth-first pre-order.
///
/// # Errors
///
/// Returns `NodeNotFound` if `start` is not in the graph.
pub fn dfs<G: GraphStore>(graph: &G, start: NodeId) -> Result<Vec<NodeId>> {
    let mut order = Vec::new();
    dfs_with_visitor(graph, start, |event| {
        if let TraversalEvent::Discover(node) = event {
            order.push(node);
        }
        Control::Continue
    })?;
    debug!(%start, visited = order.len(), "dfs complete");
    Ok(order)
}

/// Runs a depth-first traversal from `start`, reporting events to `visitor`.
///
/// Each node is discovered before any of its unvisited neighbors, and a
/// neighbor is fully explored before the next one is considered. That is the
/// order a recursive DFS produces. The traversal keeps an explicit stack of
/// neighbor iterators instead of recursing, so long paths cannot overflow
/// the call stack.
///
/// # Errors
///
/// Returns `NodeNotFound` if `start` is not in the graph.
pub fn dfs_with_visitor<G, F>(graph: &G, start: NodeId, mut visitor: F) -> Result<()>
where
    G: GraphStore,
    F: FnMut(TraversalEvent) -> Control,
{
    ensure_node(graph, start, "dfs")?;

    let mut visited = FastHashSet::default();
    visited.insert(start);

    match visitor(TraversalEvent::Discover(start)) {
        Control::Break => return Ok(()),
        Control::Prune => {
            visitor(TraversalEvent::Finish(start));
            return Ok(());
        }
        Control::Continue => {}
    }

    let mut stack = vec![(start, graph.neighbors(start))];

    while let Some((node, neighbors)) = stack.last_mut() {
        let node = *node;
        let next = neighbors.find(|neighbor| !visited.contains(neighbor));

        let Some(next) = next else {
            stack.pop();
            if visitor(TraversalEvent::Finish(node)).is_break() {
                return Ok(());
            }
            continue;
        };

        visited.insert(next);
        let edge = TraversalEvent::TreeEdge {
            source: node,
            target: next,
        };
        if visitor(edge).is_break() {
            return Ok(());
        }

        match visitor(TraversalEvent::Discover(next)) {
            Control::Break => return Ok(()),
            Control::Prune => {
                if visitor(TraversalEvent::Finish(next)).is_break() {
                    return Ok(());
                }
            }
            Control::Continue => stack.push((next, graph.neighbors(next))),
        }
    }

    Ok(())
}

/// Returns the nodes reachable from `start` in breadth-first order.
///
/// # Errors
///
/// Returns `NodeNotFound` if `start` is not in the graph.
pub fn bfs<G: GraphStore>(graph: &G, start: NodeId) -> Result<Vec<NodeId>> {
    let mut order = Vec::new();
    bfs_with_visitor(graph, start, |event| {
        if let TraversalEvent::Discover(node) = event {
            order.push(node);
        }
        Control::Continue
    })?;
    debug!(%start, visited = order.len(), "bfs complete");
    Ok(order)
}

/// Runs a breadth-first traversal from `start`, reporting events to `visitor`.
///
/// Nodes are marked visited when they leave the queue, not when they enter
/// it. A node can therefore sit in the queue more than once; later copies
/// are skipped, so each node is still discovered exactly once and in the
/// same order. [`TraversalEvent::Finish`] is never emitted.
///
/// # Errors
///
/// Returns `NodeNotFound` if `start` is not in the graph.
pub fn bfs_with_visitor<G, F>(graph: &G, start: NodeId, mut visitor: F) -> Result<()>
where
    G: GraphStore,
    F: FnMut(TraversalEvent) -> Control,
{
    ensure_node(graph, start, "bfs")?;

    let mut visited = FastHashSet::default();
    let mut queue: VecDeque<(NodeId, Option<NodeId>)> = VecDeque::from([(start, None)]);

    while let Some((node, parent)) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }

        if let Some(source) = parent {
            let edge = TraversalEvent::TreeEdge {
                source,
                target: node,
            };
            if visitor(edge).is_break() {
                return Ok(());
            }
        }

        match visitor(TraversalEvent::Discover(node)) {
            Control::Break => return Ok(()),
            Control::Prune => continue,
            Control::Continue => {}
        }

        for neighbor in graph.neighbors(node) {
            if !visited.contains(&neighbor) {
                queue.push_back((neighbor, Some(node)));
            }
        }
    }

    Ok(())
}
