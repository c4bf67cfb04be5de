//! # graphwalk-adapters
//!
//! Adapters layer for Graphwalk: graph algorithms, input loading, and
//! output renderers.
//!
//! ## Modules
//!
//! - [`plugins`] - Graph algorithms (degree, DFS, BFS, shortest path, components)
//! - [`storage`] - Edge-list loading
//! - [`render`] - Graph visualization (spring layout, SVG, DOT)

pub mod plugins;
pub mod render;
pub mod storage;
