//! Demonstration command: every query on a small sample graph.

use std::path::PathBuf;

use anyhow::Result;
use graphwalk_common::types::NodeId;
use graphwalk_core::UndirectedGraph;
use graphwalk_engine::GraphWalker;
use serde::Serialize;

use super::Context;
use crate::output::{self, Format};

/// The sample graph.
const SAMPLE_EDGES: [(u64, u64); 6] = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (3, 4)];

const DEGREE_NODE: u64 = 1;
const START_NODE: u64 = 0;
const TARGET_NODE: u64 = 4;

/// Everything the demo computes.
#[derive(Serialize)]
struct DemoReport {
    nodes: Vec<NodeId>,
    edges: Vec<(NodeId, NodeId)>,
    degree_node: NodeId,
    degree: usize,
    start: NodeId,
    dfs: Vec<NodeId>,
    bfs: Vec<NodeId>,
    target: NodeId,
    shortest_path: Vec<NodeId>,
    rendered: Option<PathBuf>,
}

fn build_report(walker: &GraphWalker) -> Result<DemoReport> {
    Ok(DemoReport {
        nodes: walker.nodes(),
        edges: walker.edges(),
        degree_node: NodeId::new(DEGREE_NODE),
        degree: walker.degree(DEGREE_NODE)?,
        start: NodeId::new(START_NODE),
        dfs: walker.dfs(START_NODE)?,
        bfs: walker.bfs(START_NODE)?,
        target: NodeId::new(TARGET_NODE),
        shortest_path: walker.shortest_path(START_NODE, TARGET_NODE)?,
        rendered: None,
    })
}

/// Run the demo command.
///
/// `render` is `None` to skip rendering, `Some(None)` to render to the
/// configured path, and `Some(Some(path))` to render to `path`.
pub fn run(ctx: &Context, render: Option<Option<PathBuf>>) -> Result<()> {
    let graph = UndirectedGraph::from_edges(SAMPLE_EDGES);
    let walker = GraphWalker::with_config(graph, ctx.config.clone())?;

    let mut report = build_report(&walker)?;
    report.rendered = match render {
        None => None,
        Some(None) => Some(walker.visualize()?),
        Some(Some(path)) => {
            walker.render_to(&path)?;
            Some(path)
        }
    };

    match ctx.format() {
        Format::Json => output::print_json(&report, ctx.quiet)?,
        Format::Table => {
            let items = vec![
                ("Nodes", output::format_nodes(&report.nodes)),
                ("Edges", output::format_edges(&report.edges)),
                (
                    "Degree",
                    format!("node {} has degree {}", report.degree_node, report.degree),
                ),
                (
                    "DFS",
                    format!("from {}: {}", report.start, output::format_nodes(&report.dfs)),
                ),
                (
                    "BFS",
                    format!("from {}: {}", report.start, output::format_nodes(&report.bfs)),
                ),
                (
                    "Shortest path",
                    format!(
                        "{} to {}: {}",
                        report.start,
                        report.target,
                        output::format_nodes(&report.shortest_path)
                    ),
                ),
            ];
            output::print_key_value_table(&items, ctx.quiet);
            if let Some(path) = &report.rendered {
                output::success(&format!("Graph rendered to {}", path.display()), ctx.quiet);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputFormat;
    use graphwalk_engine::Config;

    #[test]
    fn test_report() {
        let walker = GraphWalker::from_edges(SAMPLE_EDGES);
        let report = build_report(&walker).unwrap();

        assert_eq!(output::format_nodes(&report.nodes), "[0, 1, 2, 3, 4, 5]");
        assert_eq!(
            output::format_edges(&report.edges),
            "[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (3, 4)]"
        );
        assert_eq!(report.degree, 3);
        assert_eq!(output::format_nodes(&report.dfs), "[0, 1, 3, 4, 2, 5]");
        assert_eq!(output::format_nodes(&report.bfs), "[0, 1, 2, 3, 4, 5]");
        assert_eq!(output::format_nodes(&report.shortest_path), "[0, 1, 4]");
    }

    #[test]
    fn test_run_renders_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("demo.svg");
        let ctx = Context {
            config: Config::default(),
            format: OutputFormat::Json,
            quiet: true,
        };

        run(&ctx, Some(Some(target.clone()))).unwrap();
        assert!(std::fs::read_to_string(&target).unwrap().contains("<svg"));
    }

    #[test]
    fn test_run_renders_to_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("configured.dot");
        let ctx = Context {
            config: Config::default().with_render_path(&target),
            format: OutputFormat::Table,
            quiet: true,
        };

        run(&ctx, Some(None)).unwrap();
        assert!(std::fs::read_to_string(&target).unwrap().starts_with("graph G {"));
    }
}
