//! Algorithm plugins for Graphwalk.
//!
//! ## Modules
//!
//! - [`algorithms`] - Graph algorithms (degree, DFS, BFS, shortest path, components)

pub mod algorithms;
