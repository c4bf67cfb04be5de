//! Connected components of an undirected graph.

use graphwalk_common::types::NodeId;
use graphwalk_common::utils::hash::FastHashSet;
use graphwalk_core::GraphStore;

use super::traits::{Control, TraversalEvent};
use super::traversal::bfs_with_visitor;

/// Returns the connected components of the graph.
///
/// Components are ordered by their first node in the graph's node order,
/// and each lists its nodes in breadth-first order from that node.
pub fn connected_components<G: GraphStore>(graph: &G) -> Vec<Vec<NodeId>> {
    let mut seen = FastHashSet::default();
    let mut components = Vec::new();

    for root in graph.nodes() {
        if seen.contains(&root) {
            continue;
        }

        let mut component = Vec::new();
        // `root` comes from the graph itself, so the start check cannot fail.
        let _ = bfs_with_visitor(graph, root, |event| {
            if let TraversalEvent::Discover(node) = event {
                component.push(node);
            }
            Control::Continue
        });
        seen.extend(component.iter().copied());
        components.push(component);
    }

    components
}

/// Returns the number of connected components.
pub fn connected_component_count<G: GraphStore>(graph: &G) -> usize {
    connected_components(graph).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphwalk_core::UndirectedGraph;

    #[test]
    fn test_components() {
        let mut graph = UndirectedGraph::from_edges([(0u64, 1u64), (2, 3), (1, 4), (3, 5)]);
        graph.add_node(9u64);

        let components: Vec<Vec<u64>> = connected_components(&graph)
            .into_iter()
            .map(|c| c.into_iter().map(u64::from).collect())
            .collect();
        assert_eq!(components, vec![vec![0, 1, 4], vec![2, 3, 5], vec![9]]);
        assert_eq!(connected_component_count(&graph), 3);
    }

    #[test]
    fn test_empty_graph() {
        assert!(connected_components(&UndirectedGraph::new()).is_empty());
    }
}
