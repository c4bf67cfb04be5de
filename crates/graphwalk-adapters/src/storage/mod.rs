//! Graph input.
//!
//! - [`edge_list`] - Plain-text edge lists

pub mod edge_list;

pub use edge_list::{load_edge_list, parse_edge_list};
