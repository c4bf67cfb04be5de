//! Plain-text edge lists.
//!
//! One edge per line, two node ids separated by whitespace and/or a comma:
//!
//! ```text
//! # sample graph
//! 0 1
//! 0, 2
//! 1,3
//! 7        # isolated node
//! ```
//!
//! Blank lines are skipped and `#` starts a comment. A line holding a single
//! id declares a node without edges.

use std::fs;
use std::path::Path;

use graphwalk_common::types::NodeId;
use graphwalk_common::utils::error::{Error, Result};
use graphwalk_core::{GraphStore, UndirectedGraph};
use tracing::info;

/// Parses an edge list into a graph.
///
/// # Errors
///
/// Returns [`Error::Parse`] for a line that does not hold one or two
/// non-negative integer ids.
pub fn parse_edge_list(input: &str) -> Result<UndirectedGraph> {
    let mut graph = UndirectedGraph::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let content = raw.split_once('#').map_or(raw, |(before, _)| before);

        let tokens: Vec<&str> = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        match tokens.as_slice() {
            [] => {}
            [node] => {
                graph.add_node(parse_node(node, line)?);
            }
            [a, b] => {
                graph.add_edge(parse_node(a, line)?, parse_node(b, line)?);
            }
            _ => {
                return Err(Error::Parse {
                    line,
                    message: format!("expected one or two node ids, found {}", tokens.len()),
                });
            }
        }
    }

    Ok(graph)
}

/// Reads and parses an edge-list file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or [`Error::Parse`] if
/// its contents are malformed.
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<UndirectedGraph> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let graph = parse_edge_list(&contents)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded edge list"
    );
    Ok(graph)
}

fn parse_node(token: &str, line: usize) -> Result<NodeId> {
    token.parse::<NodeId>().map_err(|e| Error::Parse {
        line,
        message: format!("invalid node id {token:?}: {e}"),
    })
}
