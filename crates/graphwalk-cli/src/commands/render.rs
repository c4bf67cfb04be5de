//! Render command.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use graphwalk_adapters::render::RenderFormat;
use graphwalk_engine::GraphWalker;

use super::Context;
use crate::output;

/// Run the render command.
pub fn run(
    ctx: &Context,
    path: &Path,
    output_path: Option<PathBuf>,
    format: Option<RenderFormat>,
) -> Result<()> {
    let mut config = ctx.config.clone();
    if let Some(format) = format {
        config = config.with_render_format(format);
    }
    if let Some(output_path) = output_path {
        config = config.with_render_path(output_path);
    }

    let walker = GraphWalker::open_with_config(path, config)
        .with_context(|| format!("failed to load edge list {}", path.display()))?;
    let written = walker.visualize().context("failed to render graph")?;
    output::success(
        &format!(
            "Rendered {} nodes and {} edges to {}",
            walker.node_count(),
            walker.edge_count(),
            written.display()
        ),
        ctx.quiet,
    );
    Ok(())
}
