//! Graph statistics command.

use std::path::Path;

use anyhow::Result;
use graphwalk_engine::GraphWalker;
use serde::Serialize;

use super::Context;
use crate::output::{self, Format};

/// Statistics about a graph.
#[derive(Serialize)]
struct InfoOutput {
    node_count: usize,
    edge_count: usize,
    self_loop_count: usize,
    isolated_count: usize,
    min_degree: usize,
    max_degree: usize,
    mean_degree: f64,
    component_count: usize,
    largest_component: usize,
}

fn collect(walker: &GraphWalker) -> InfoOutput {
    let stats = walker.statistics();
    let components = walker.connected_components();

    InfoOutput {
        node_count: stats.node_count,
        edge_count: stats.edge_count,
        self_loop_count: stats.self_loop_count,
        isolated_count: stats.isolated_count,
        min_degree: stats.min_degree,
        max_degree: stats.max_degree,
        mean_degree: stats.mean_degree,
        component_count: components.len(),
        largest_component: components.iter().map(Vec::len).max().unwrap_or(0),
    }
}

/// Run the info command.
pub fn run(ctx: &Context, path: &Path) -> Result<()> {
    let walker = ctx.open(path)?;
    let output = collect(&walker);

    match ctx.format() {
        Format::Json => output::print_json(&output, ctx.quiet)?,
        Format::Table => {
            let items = vec![
                ("Nodes", output.node_count.to_string()),
                ("Edges", output.edge_count.to_string()),
                ("Self-loops", output.self_loop_count.to_string()),
                ("Isolated Nodes", output.isolated_count.to_string()),
                ("Min Degree", output.min_degree.to_string()),
                ("Max Degree", output.max_degree.to_string()),
                ("Mean Degree", format!("{:.2}", output.mean_degree)),
                ("Components", output.component_count.to_string()),
                ("Largest Component", output.largest_component.to_string()),
            ];
            output::print_key_value_table(&items, ctx.quiet);
        }
    }

    Ok(())
}
