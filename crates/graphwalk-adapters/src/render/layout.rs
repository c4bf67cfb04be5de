//! Force-directed layout (Fruchterman-Reingold).
//!
//! Every pair of nodes repels with force `k^2 / d` and every edge attracts
//! its endpoints with force `d^2 / k`, where `k = sqrt(1 / n)` is the ideal
//! edge length. Each iteration moves every node along its net force, capped
//! by a temperature that cools linearly to zero.
//!
//! Nodes start evenly spaced on a circle in node order, so the result is
//! deterministic for a given graph.

use std::f64::consts::TAU;

use graphwalk_common::types::NodeId;
use graphwalk_core::{GraphStore, UndirectedGraph};

/// Smallest distance used in force computations, avoids division by zero.
const MIN_DISTANCE: f64 = 0.01;

/// Starting temperature (maximum step length).
const INITIAL_TEMPERATURE: f64 = 0.1;

/// A position in the unit square.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, `0.0..=1.0`.
    pub x: f64,
    /// Vertical coordinate, `0.0..=1.0`.
    pub y: f64,
}

/// Node positions, in the graph's node order.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    positions: Vec<(NodeId, Point)>,
}

impl Layout {
    /// Returns the position of a node.
    #[must_use]
    pub fn position(&self, node: NodeId) -> Option<Point> {
        self.positions
            .iter()
            .find(|(n, _)| *n == node)
            .map(|(_, p)| *p)
    }

    /// Iterates over `(node, position)` pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.positions.iter().copied()
    }

    /// Returns the number of placed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no node was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Spring-embedder layout.
#[derive(Debug, Clone, Copy)]
pub struct SpringLayout {
    iterations: usize,
}

impl SpringLayout {
    /// Iterations used by [`SpringLayout::default`].
    pub const DEFAULT_ITERATIONS: usize = 50;

    /// Creates a layout that runs `iterations` refinement steps.
    #[must_use]
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Computes positions for every node, scaled into the unit square.
    #[must_use]
    pub fn compute(&self, graph: &UndirectedGraph) -> Layout {
        let nodes: Vec<NodeId> = graph.nodes().collect();
        let n = nodes.len();

        if n == 0 {
            return Layout::default();
        }
        if n == 1 {
            return Layout {
                positions: vec![(nodes[0], Point { x: 0.5, y: 0.5 })],
            };
        }

        // Edges as index pairs; self-loops exert no force.
        let edges: Vec<(usize, usize)> = graph
            .edges()
            .filter(|(a, b)| a != b)
            .filter_map(|(a, b)| Some((graph.position(a)?, graph.position(b)?)))
            .collect();

        let mut pos: Vec<[f64; 2]> = (0..n)
            .map(|i| {
                let angle = TAU * i as f64 / n as f64;
                [angle.cos(), angle.sin()]
            })
            .collect();

        let k = (1.0 / n as f64).sqrt();
        let mut temperature = INITIAL_TEMPERATURE;
        let cooling = INITIAL_TEMPERATURE / (self.iterations as f64 + 1.0);

        for _ in 0..self.iterations {
            let mut disp = vec![[0.0f64; 2]; n];

            for i in 0..n {
                for j in (i + 1)..n {
                    let dx = pos[i][0] - pos[j][0];
                    let dy = pos[i][1] - pos[j][1];
                    let dist = dx.hypot(dy).max(MIN_DISTANCE);
                    let force = k * k / (dist * dist);
                    disp[i][0] += dx * force;
                    disp[i][1] += dy * force;
                    disp[j][0] -= dx * force;
                    disp[j][1] -= dy * force;
                }
            }

            for &(a, b) in &edges {
                let dx = pos[a][0] - pos[b][0];
                let dy = pos[a][1] - pos[b][1];
                let dist = dx.hypot(dy).max(MIN_DISTANCE);
                let force = dist / k;
                disp[a][0] -= dx * force;
                disp[a][1] -= dy * force;
                disp[b][0] += dx * force;
                disp[b][1] += dy * force;
            }

            for (p, d) in pos.iter_mut().zip(&disp) {
                let length = d[0].hypot(d[1]).max(MIN_DISTANCE);
                p[0] += d[0] * temperature / length;
                p[1] += d[1] * temperature / length;
            }

            temperature -= cooling;
        }

        Layout {
            positions: nodes.into_iter().zip(normalize(&pos)).collect(),
        }
    }
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATIONS)
    }
}

/// Scales positions into the unit square, keeping the aspect ratio and
/// centering the shorter axis.
fn normalize(pos: &[[f64; 2]]) -> Vec<Point> {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in pos {
        min_x = min_x.min(p[0]);
        min_y = min_y.min(p[1]);
        max_x = max_x.max(p[0]);
        max_y = max_y.max(p[1]);
    }

    let span = (max_x - min_x).max(max_y - min_y);
    if span <= f64::EPSILON {
        return vec![Point { x: 0.5, y: 0.5 }; pos.len()];
    }
    let offset_x = (span - (max_x - min_x)) / 2.0;
    let offset_y = (span - (max_y - min_y)) / 2.0;

    pos.iter()
        .map(|p| Point {
            x: ((p[0] - min_x + offset_x) / span).clamp(0.0, 1.0),
            y: ((p[1] - min_y + offset_y) / span).clamp(0.0, 1.0),
        })
        .collect()
}
