//! # graphwalk-core
//!
//! Core layer for Graphwalk: the graph store and the index structures
//! behind it.
//!
//! This crate provides the in-memory undirected graph every algorithm runs
//! against. It depends only on `graphwalk-common`.
//!
//! ## Modules
//!
//! - [`graph`] - The [`GraphStore`] capability and the undirected graph
//! - [`index`] - Insertion-ordered adjacency lists
//! - [`statistics`] - Degree and size summaries of a graph

pub mod graph;
pub mod index;
pub mod statistics;

// Re-export commonly used types
pub use graph::{GraphStore, UndirectedGraph};
pub use index::adjacency::OrderedAdjacency;
pub use statistics::GraphStatistics;
