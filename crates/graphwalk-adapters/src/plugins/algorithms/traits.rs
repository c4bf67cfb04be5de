//! Visitor types shared by the traversal algorithms.

use graphwalk_common::types::NodeId;

/// An event emitted while traversing a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalEvent {
    /// A node is visited for the first time.
    Discover(NodeId),
    /// `target` is first reached through the edge from `source`.
    ///
    /// Emitted right before the matching [`Discover`](Self::Discover).
    TreeEdge {
        /// Node the edge was followed from.
        source: NodeId,
        /// Newly reached node.
        target: NodeId,
    },
    /// All of a node's neighbors have been explored (DFS only).
    Finish(NodeId),
}

/// What the traversal should do after a visitor callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    /// Keep going.
    #[default]
    Continue,
    /// Do not expand the neighbors of the node just discovered.
    Prune,
    /// Stop the traversal immediately.
    Break,
}

impl Control {
    /// Returns true for [`Control::Break`].
    #[must_use]
    pub fn is_break(self) -> bool {
        matches!(self, Self::Break)
    }
}
