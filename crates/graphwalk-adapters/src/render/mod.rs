//! Graph visualization.
//!
//! Rendering is a side channel: no query operation ever calls into this
//! module. Callers pick a [`Renderer`] and point it at a writer or a file.
//!
//! - [`layout`] - Force-directed node placement
//! - [`svg`] - SVG image output
//! - [`dot`] - Graphviz DOT output

pub mod dot;
pub mod layout;
pub mod svg;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use graphwalk_common::utils::error::Result;
use graphwalk_core::UndirectedGraph;
use serde::{Deserialize, Serialize};
use tracing::info;

pub use dot::DotRenderer;
pub use layout::{Layout, Point, SpringLayout};
pub use svg::SvgRenderer;

/// Default file a rendering is written to.
pub const DEFAULT_RENDER_PATH: &str = "graph_visualization.svg";

/// Default image title.
pub const DEFAULT_TITLE: &str = "Graph Visualization";

/// Output formats supported by the built-in renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Scalable Vector Graphics image.
    Svg,
    /// Graphviz DOT source.
    Dot,
}

impl RenderFormat {
    /// Guesses the format from a file extension (`svg`, `dot`, `gv`).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(Self::Svg),
            "dot" | "gv" => Some(Self::Dot),
            _ => None,
        }
    }

    /// Builds the renderer for this format.
    #[must_use]
    pub fn renderer(self, options: &RenderOptions) -> Box<dyn Renderer> {
        match self {
            Self::Svg => Box::new(SvgRenderer::new(options.clone())),
            Self::Dot => Box::new(DotRenderer::new(options.title.clone())),
        }
    }
}

/// Settings shared by the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Title drawn above the graph.
    pub title: String,
    /// Force-directed layout iterations.
    pub layout_iterations: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: DEFAULT_TITLE.to_string(),
            layout_iterations: SpringLayout::DEFAULT_ITERATIONS,
        }
    }
}

/// Something that can draw a graph.
pub trait Renderer {
    /// Writes a rendering of `graph` to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn render(&self, graph: &UndirectedGraph, out: &mut dyn Write) -> Result<()>;

    /// Writes a rendering of `graph` to the file at `path`, replacing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    fn render_to_file(&self, graph: &UndirectedGraph, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.render(graph, &mut out)?;
        out.flush()?;
        info!(path = %path.display(), "graph rendered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(RenderFormat::from_path(&PathBuf::from("a.svg")), Some(RenderFormat::Svg));
        assert_eq!(RenderFormat::from_path(&PathBuf::from("a.GV")), Some(RenderFormat::Dot));
        assert_eq!(RenderFormat::from_path(&PathBuf::from("a.dot")), Some(RenderFormat::Dot));
        assert_eq!(RenderFormat::from_path(&PathBuf::from("a.png")), None);
        assert_eq!(RenderFormat::from_path(&PathBuf::from("noext")), None);
    }

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let graph = UndirectedGraph::from_edges([(0u64, 1u64), (1, 2)]);
        let options = RenderOptions::default();

        let svg_path = dir.path().join("graph.svg");
        RenderFormat::Svg
            .renderer(&options)
            .render_to_file(&graph, &svg_path)
            .unwrap();
        let svg = std::fs::read_to_string(&svg_path).unwrap();
        assert!(svg.starts_with("<svg"));

        let dot_path = dir.path().join("graph.dot");
        RenderFormat::Dot
            .renderer(&options)
            .render_to_file(&graph, &dot_path)
            .unwrap();
        let dot = std::fs::read_to_string(&dot_path).unwrap();
        assert!(dot.contains("0 -- 1;"));
    }
}
