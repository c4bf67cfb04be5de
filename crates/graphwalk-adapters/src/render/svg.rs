//! SVG image output.

use std::io::Write;

use graphwalk_common::utils::error::Result;
use graphwalk_core::UndirectedGraph;

use super::layout::{Point, SpringLayout};
use super::{RenderOptions, Renderer};

const MARGIN: f64 = 40.0;
const TITLE_HEIGHT: f64 = 40.0;
const NODE_RADIUS: f64 = 18.0;

const NODE_FILL: &str = "lightblue";
const EDGE_STROKE: &str = "gray";
const LABEL_FILL: &str = "black";
const LABEL_SIZE: u32 = 15;

/// Draws a graph as an SVG image using a spring layout.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    options: RenderOptions,
}

impl SvgRenderer {
    /// Creates a renderer with the given options.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Maps a unit-square position to canvas pixels.
    fn project(&self, p: Point) -> (f64, f64) {
        let width = f64::from(self.options.width);
        let height = f64::from(self.options.height);
        let inner_w = (width - 2.0 * MARGIN).max(0.0);
        let inner_h = (height - TITLE_HEIGHT - 2.0 * MARGIN).max(0.0);
        (
            MARGIN + p.x * inner_w,
            TITLE_HEIGHT + MARGIN + p.y * inner_h,
        )
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, graph: &UndirectedGraph, out: &mut dyn Write) -> Result<()> {
        let layout = SpringLayout::new(self.options.layout_iterations).compute(graph);
        let (width, height) = (self.options.width, self.options.height);

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(out, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            out,
            r#"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="20">{}</text>"#,
            f64::from(width) / 2.0,
            TITLE_HEIGHT * 0.75,
            escape(&self.options.title)
        )?;

        writeln!(out, r#"  <g stroke="{EDGE_STROKE}" stroke-width="1.5" fill="none">"#)?;
        for (a, b) in graph.edges() {
            let (Some(pa), Some(pb)) = (layout.position(a), layout.position(b)) else {
                continue;
            };
            let (x1, y1) = self.project(pa);
            if a == b {
                // Self-loop: a small circle resting on top of the node.
                writeln!(
                    out,
                    r#"    <circle cx="{x1:.1}" cy="{:.1}" r="{:.1}"/>"#,
                    y1 - NODE_RADIUS,
                    NODE_RADIUS * 0.8
                )?;
            } else {
                let (x2, y2) = self.project(pb);
                writeln!(
                    out,
                    r#"    <line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}"/>"#
                )?;
            }
        }
        writeln!(out, "  </g>")?;

        writeln!(
            out,
            r#"  <g font-family="sans-serif" font-size="{LABEL_SIZE}" font-weight="bold" text-anchor="middle" dominant-baseline="central">"#
        )?;
        for (node, p) in layout.iter() {
            let (x, y) = self.project(p);
            writeln!(
                out,
                r#"    <circle cx="{x:.1}" cy="{y:.1}" r="{NODE_RADIUS:.1}" fill="{NODE_FILL}"/>"#
            )?;
            writeln!(
                out,
                r#"    <text x="{x:.1}" y="{y:.1}" fill="{LABEL_FILL}">{node}</text>"#
            )?;
        }
        writeln!(out, "  </g>")?;
        writeln!(out, "</svg>")?;
        Ok(())
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(graph: &UndirectedGraph, options: RenderOptions) -> String {
        let mut out = Vec::new();
        SvgRenderer::new(options).render(graph, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_svg_elements() {
        let graph =
            UndirectedGraph::from_edges([(0u64, 1u64), (0, 2), (1, 3), (1, 4), (2, 5), (3, 4)]);
        let svg = render(&graph, RenderOptions::default());

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="800" height="600""#));
        assert!(svg.contains(">Graph Visualization</text>"));
        assert_eq!(svg.matches("<line ").count(), 6);
        assert_eq!(svg.matches(r#"fill="lightblue""#).count(), 6);
        for label in 0..6 {
            assert!(svg.contains(&format!(">{label}</text>")));
        }
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_svg_self_loop_and_title_escape() {
        let graph = UndirectedGraph::from_edges([(7u64, 7u64)]);
        let options = RenderOptions {
            title: "a < b & c".to_string(),
            ..RenderOptions::default()
        };
        let svg = render(&graph, options);

        assert!(svg.contains("a &lt; b &amp; c"));
        assert_eq!(svg.matches("<line ").count(), 0);
        // Loop circle plus the node itself.
        assert_eq!(svg.matches("<circle ").count(), 2);
    }

    #[test]
    fn test_nodes_inside_canvas() {
        let graph = UndirectedGraph::from_edges([(0u64, 1u64), (1, 2), (2, 3)]);
        let renderer = SvgRenderer::new(RenderOptions {
            width: 400,
            height: 300,
            ..RenderOptions::default()
        });
        let layout = SpringLayout::default().compute(&graph);
        for (_, p) in layout.iter() {
            let (x, y) = renderer.project(p);
            assert!((0.0..=400.0).contains(&x));
            assert!((0.0..=300.0).contains(&y));
        }
    }
}
