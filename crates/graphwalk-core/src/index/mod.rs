//! Index structures for graph storage.
//!
//! - [`adjacency`] - Insertion-ordered adjacency lists

pub mod adjacency;
