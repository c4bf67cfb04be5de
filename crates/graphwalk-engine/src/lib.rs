//! # graphwalk-engine
//!
//! The main entry point for Graphwalk: a built graph plus configuration,
//! with every query and the optional rendering step behind one type.
//!
//! ## Modules
//!
//! - [`walker`] - GraphWalker struct: graph loading, queries, rendering
//! - [`config`] - Configuration options

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod walker;

pub use config::Config;
pub use walker::GraphWalker;
