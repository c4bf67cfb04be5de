//! Graphviz DOT output.

use std::io::Write;

use graphwalk_common::utils::error::Result;
use graphwalk_core::{GraphStore, UndirectedGraph};

use super::Renderer;

/// Writes a graph as Graphviz `graph { ... }` source.
#[derive(Debug, Clone)]
pub struct DotRenderer {
    title: String,
}

impl DotRenderer {
    /// Creates a renderer that labels the graph with `title`.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Renderer for DotRenderer {
    fn render(&self, graph: &UndirectedGraph, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "graph G {{")?;
        writeln!(out, "  label=\"{}\";", escape(&self.title))?;
        writeln!(out, "  labelloc=t;")?;
        writeln!(
            out,
            "  node [shape=circle, style=filled, fillcolor=lightblue, fontname=\"Helvetica-Bold\"];"
        )?;
        writeln!(out, "  edge [color=gray];")?;
        for node in graph.nodes() {
            writeln!(out, "  {node};")?;
        }
        for (a, b) in graph.edges() {
            writeln!(out, "  {a} -- {b};")?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_output() {
        let mut graph = UndirectedGraph::from_edges([(0u64, 1u64), (1, 1)]);
        graph.add_node(5u64);

        let mut out = Vec::new();
        DotRenderer::new("say \"hi\"").render(&graph, &mut out).unwrap();
        let dot = String::from_utf8(out).unwrap();

        assert!(dot.starts_with("graph G {\n"));
        assert!(dot.contains("label=\"say \\\"hi\\\"\";"));
        assert!(dot.contains("  5;\n"));
        assert!(dot.contains("  0 -- 1;\n"));
        assert!(dot.contains("  1 -- 1;\n"));
        assert!(dot.trim_end().ends_with('}'));
    }
}
