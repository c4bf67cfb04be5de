//! Size and degree statistics for a graph.
//!
//! Used by the CLI's `info` command and logged when a graph is loaded.

use serde::Serialize;

use crate::graph::{GraphStore, UndirectedGraph};

/// Summary statistics of an undirected graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphStatistics {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of distinct undirected edges.
    pub edge_count: usize,
    /// Number of self-loops.
    pub self_loop_count: usize,
    /// Number of nodes without any edge.
    pub isolated_count: usize,
    /// Smallest node degree (0 for an empty graph).
    pub min_degree: usize,
    /// Largest node degree (0 for an empty graph).
    pub max_degree: usize,
    /// Mean node degree (0.0 for an empty graph).
    pub mean_degree: f64,
}

impl GraphStatistics {
    /// Collects statistics from a graph.
    #[must_use]
    pub fn collect(graph: &UndirectedGraph) -> Self {
        let mut stats = Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            self_loop_count: graph.self_loop_count(),
            ..Self::default()
        };

        let mut total = 0usize;
        let mut min = usize::MAX;
        for node in graph.nodes() {
            let degree = graph.degree(node).unwrap_or(0);
            total += degree;
            min = min.min(degree);
            stats.max_degree = stats.max_degree.max(degree);
            if degree == 0 {
                stats.isolated_count += 1;
            }
        }

        if stats.node_count > 0 {
            stats.min_degree = min;
            stats.mean_degree = total as f64 / stats.node_count as f64;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let stats = GraphStatistics::collect(&UndirectedGraph::new());
        assert_eq!(stats, GraphStatistics::default());
    }

    #[test]
    fn test_sample_graph() {
        let graph =
            UndirectedGraph::from_edges([(0u64, 1u64), (0, 2), (1, 3), (1, 4), (2, 5), (3, 4)]);
        let stats = GraphStatistics::collect(&graph);

        assert_eq!(stats.node_count, 6);
        assert_eq!(stats.edge_count, 6);
        assert_eq!(stats.min_degree, 1);
        assert_eq!(stats.max_degree, 3);
        assert_eq!(stats.mean_degree, 2.0);
        assert_eq!(stats.isolated_count, 0);
    }

    #[test]
    fn test_self_loops_and_isolated() {
        let mut graph = UndirectedGraph::from_edges([(1u64, 1u64), (1, 2)]);
        graph.add_node(3u64);
        let stats = GraphStatistics::collect(&graph);

        assert_eq!(stats.self_loop_count, 1);
        assert_eq!(stats.isolated_count, 1);
        assert_eq!(stats.max_degree, 3);
        assert_eq!(stats.min_degree, 0);
    }
}
