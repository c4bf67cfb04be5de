//! Error types for Graphwalk.
//!
//! Every fallible operation in the workspace returns [`Result`]. "No path
//! between two nodes" is deliberately absent from this taxonomy: it is a
//! successful lookup that yields an empty path.

use crate::types::NodeId;

/// The main error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A query referenced a node that is not part of the graph.
    #[error("node {node} not found in graph (during {operation})")]
    NodeNotFound {
        /// The missing node.
        node: NodeId,
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// Malformed edge-list input.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O failure while reading input or writing a rendering.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::NodeNotFound`].
    #[must_use]
    pub fn node_not_found(node: NodeId, operation: &'static str) -> Self {
        Self::NodeNotFound { node, operation }
    }
}

/// Result type alias for Graphwalk operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_message() {
        let err = Error::node_not_found(NodeId::new(99), "degree");
        assert_eq!(err.to_string(), "node 99 not found in graph (during degree)");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
