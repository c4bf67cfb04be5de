//! Graph algorithms for Graphwalk.
//!
//! Every algorithm is written against [`GraphStore`], so it runs on any
//! store that enumerates neighbors in a stable order. Queries are read-only
//! and fail with [`Error::NodeNotFound`] when a referenced node is absent.
//!
//! ## Algorithm Categories
//!
//! - [`traversal`] - BFS, DFS with visitor pattern
//! - [`shortest_path`] - Unweighted shortest path
//! - [`components`] - Connected components
//! - [`degree`] - Degree lookup
//!
//! ## Usage
//!
//! ```
//! use graphwalk_adapters::plugins::algorithms::{bfs, dfs, shortest_path};
//! use graphwalk_common::types::NodeId;
//! use graphwalk_core::UndirectedGraph;
//!
//! let graph = UndirectedGraph::from_edges([(0u64, 1u64), (0, 2), (1, 3), (1, 4), (2, 5), (3, 4)]);
//!
//! let order = dfs(&graph, NodeId::new(0))?;
//! assert_eq!(order.len(), 6);
//!
//! let path = shortest_path(&graph, NodeId::new(0), NodeId::new(4))?;
//! assert_eq!(path, [0, 1, 4].map(NodeId::new));
//! # Ok::<(), graphwalk_common::Error>(())
//! ```
//!
//! [`GraphStore`]: graphwalk_core::GraphStore
//! [`Error::NodeNotFound`]: graphwalk_common::Error::NodeNotFound

pub mod components;
pub mod degree;
pub mod shortest_path;
mod traits;
pub mod traversal;

use graphwalk_common::types::NodeId;
use graphwalk_common::utils::error::{Error, Result};
use graphwalk_core::GraphStore;

// Core traits
pub use traits::{Control, TraversalEvent};

// Traversal algorithms
pub use traversal::{bfs, bfs_with_visitor, dfs, dfs_with_visitor};

// Shortest path algorithms
pub use shortest_path::{shortest_path, shortest_path_length};

// Component algorithms
pub use components::{connected_component_count, connected_components};

// Degree
pub use degree::{degree, degrees};

/// Fails with `NodeNotFound` unless `node` is in the graph.
pub(crate) fn ensure_node<G: GraphStore>(
    graph: &G,
    node: NodeId,
    operation: &'static str,
) -> Result<()> {
    if graph.has_node(node) {
        Ok(())
    } else {
        Err(Error::node_not_found(node, operation))
    }
}
