//! # Graphwalk
//!
//! Deterministic traversal and shortest paths over undirected graphs built
//! from edge lists.
//!
//! Start with [`GraphWalker`]: build one from edge pairs or an edge-list
//! file, then ask it for degrees, traversal orders and shortest paths.
//! Neighbors are always visited in the order their edges were first added,
//! so every query gives the same answer on every run.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphwalk::{GraphWalker, NodeId};
//!
//! let walker = GraphWalker::from_edges([(0u64, 1u64), (0, 2), (1, 3), (1, 4), (2, 5), (3, 4)]);
//!
//! assert_eq!(walker.degree(1u64)?, 3);
//!
//! let dfs: Vec<u64> = walker.dfs(0u64)?.into_iter().map(NodeId::as_u64).collect();
//! assert_eq!(dfs, [0, 1, 3, 4, 2, 5]);
//!
//! let path: Vec<u64> = walker.shortest_path(0u64, 4u64)?.into_iter().map(NodeId::as_u64).collect();
//! assert_eq!(path, [0, 1, 4]);
//! # Ok::<(), graphwalk::Error>(())
//! ```
//!
//! ## Layers
//!
//! | Module | Contents |
//! | ------ | -------- |
//! | [`graph`] | Adjacency storage and the [`UndirectedGraph`] type |
//! | [`algorithms`] | Degree, DFS, BFS, shortest path, components |
//! | [`render`] | Spring layout with SVG and DOT output |
//! | [`storage`] | Edge-list parsing and loading |

// Re-export the main API
pub use graphwalk_engine::{Config, GraphWalker};

// Re-export core types
pub use graphwalk_common::types::NodeId;
pub use graphwalk_common::utils::error::{Error, Result};
pub use graphwalk_core::{GraphStatistics, GraphStore, UndirectedGraph};

/// Graph storage.
pub mod graph {
    pub use graphwalk_core::*;
}

/// Graph algorithms.
pub mod algorithms {
    pub use graphwalk_adapters::plugins::algorithms::*;
}

/// Graph rendering.
pub mod render {
    pub use graphwalk_adapters::render::*;
}

/// Edge-list input.
pub mod storage {
    pub use graphwalk_adapters::storage::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_work_together() {
        let graph = UndirectedGraph::from_edges([(0u64, 1u64), (1, 2)]);
        let order = algorithms::bfs(&graph, NodeId::new(2)).unwrap();
        assert_eq!(order, [2, 1, 0].map(NodeId::new));

        let walker = GraphWalker::new(graph);
        assert_eq!(walker.shortest_path(0u64, 2u64).unwrap().len(), 3);
    }

    #[test]
    fn test_render_through_walker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.dot");
        let walker = GraphWalker::from_edges([(3u64, 4u64)]);
        walker.render_to(&path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("3 -- 4;"));
    }
}
