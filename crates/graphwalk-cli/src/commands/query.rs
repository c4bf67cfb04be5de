//! Single-query commands: degree, traversals, shortest path.

use std::path::Path;

use anyhow::Result;
use graphwalk_common::types::NodeId;
use graphwalk_engine::GraphWalker;
use serde::Serialize;

use super::Context;
use crate::output::{self, Format};

/// Which traversal to run.
#[derive(Clone, Copy)]
pub enum Traversal {
    Dfs,
    Bfs,
}

impl Traversal {
    fn name(self) -> &'static str {
        match self {
            Traversal::Dfs => "dfs",
            Traversal::Bfs => "bfs",
        }
    }
}

/// Degree lookup result.
#[derive(Serialize)]
struct DegreeOutput {
    node: NodeId,
    degree: usize,
}

/// Traversal result.
#[derive(Serialize)]
struct TraversalOutput {
    algorithm: &'static str,
    start: NodeId,
    visited: usize,
    order: Vec<NodeId>,
}

/// Shortest path result.
#[derive(Serialize)]
struct PathOutput {
    source: NodeId,
    target: NodeId,
    found: bool,
    hops: Option<usize>,
    path: Vec<NodeId>,
}

/// Run the degree command.
pub fn degree(ctx: &Context, path: &Path, node: u64) -> Result<()> {
    let walker = ctx.open(path)?;
    let output = DegreeOutput {
        node: NodeId::new(node),
        degree: walker.degree(node)?,
    };

    match ctx.format() {
        Format::Json => output::print_json(&output, ctx.quiet)?,
        Format::Table => {
            let items = vec![
                ("Node", output.node.to_string()),
                ("Degree", output.degree.to_string()),
            ];
            output::print_key_value_table(&items, ctx.quiet);
        }
    }
    Ok(())
}

/// Run the dfs or bfs command.
pub fn traverse(ctx: &Context, path: &Path, start: u64, kind: Traversal) -> Result<()> {
    let walker = ctx.open(path)?;
    let output = run_traversal(&walker, start, kind)?;

    match ctx.format() {
        Format::Json => output::print_json(&output, ctx.quiet)?,
        Format::Table => {
            if !ctx.quiet {
                let mut table = output::create_table();
                output::add_header(&mut table, &["Step", "Node"]);
                for (step, node) in output.order.iter().enumerate() {
                    table.add_row(vec![(step + 1).to_string(), node.to_string()]);
                }
                println!("{table}");
            }
        }
    }
    Ok(())
}

fn run_traversal(walker: &GraphWalker, start: u64, kind: Traversal) -> Result<TraversalOutput> {
    let order = match kind {
        Traversal::Dfs => walker.dfs(start)?,
        Traversal::Bfs => walker.bfs(start)?,
    };
    Ok(TraversalOutput {
        algorithm: kind.name(),
        start: NodeId::new(start),
        visited: order.len(),
        order,
    })
}

/// Run the path command.
pub fn path(ctx: &Context, path: &Path, source: u64, target: u64) -> Result<()> {
    let walker = ctx.open(path)?;
    let output = run_path(&walker, source, target)?;

    match ctx.format() {
        Format::Json => output::print_json(&output, ctx.quiet)?,
        Format::Table => {
            let items = vec![
                ("Source", output.source.to_string()),
                ("Target", output.target.to_string()),
                (
                    "Hops",
                    output
                        .hops
                        .map(|h| h.to_string())
                        .unwrap_or_else(|| "unreachable".to_string()),
                ),
                ("Path", output::format_nodes(&output.path)),
            ];
            output::print_key_value_table(&items, ctx.quiet);
        }
    }
    Ok(())
}

fn run_path(walker: &GraphWalker, source: u64, target: u64) -> Result<PathOutput> {
    let path = walker.shortest_path(source, target)?;
    Ok(PathOutput {
        source: NodeId::new(source),
        target: NodeId::new(target),
        found: !path.is_empty(),
        hops: path.len().checked_sub(1),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphWalker {
        GraphWalker::from_edges([(0u64, 1u64), (0, 2), (1, 3), (1, 4), (2, 5), (3, 4), (7, 8)])
    }

    #[test]
    fn test_run_traversal() {
        let walker = sample();
        let dfs = run_traversal(&walker, 0, Traversal::Dfs).unwrap();
        assert_eq!(dfs.algorithm, "dfs");
        assert_eq!(dfs.visited, 6);
        assert_eq!(output::format_nodes(&dfs.order), "[0, 1, 3, 4, 2, 5]");

        let bfs = run_traversal(&walker, 7, Traversal::Bfs).unwrap();
        assert_eq!(output::format_nodes(&bfs.order), "[7, 8]");
    }

    #[test]
    fn test_run_path() {
        let walker = sample();

        let found = run_path(&walker, 0, 4).unwrap();
        assert!(found.found);
        assert_eq!(found.hops, Some(2));

        let missing = run_path(&walker, 0, 8).unwrap();
        assert!(!missing.found);
        assert_eq!(missing.hops, None);

        assert!(run_path(&walker, 0, 99).is_err());
    }

    #[test]
    fn test_json_shape() {
        let walker = sample();
        let value = serde_json::to_value(run_path(&walker, 0, 4).unwrap()).unwrap();
        assert_eq!(value["path"], serde_json::json!([0, 1, 4]));
        assert_eq!(value["hops"], serde_json::json!(2));
    }
}
