//! # graphwalk-common
//!
//! Foundation layer for Graphwalk: identifier types, errors, and utilities.
//!
//! This crate provides the fundamental building blocks used by all other
//! Graphwalk crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (NodeId)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::NodeId;
pub use utils::error::{Error, Result};
