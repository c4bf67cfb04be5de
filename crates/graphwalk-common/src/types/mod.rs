//! Core type definitions for Graphwalk.
//!
//! Graphs are keyed by caller-chosen integer identifiers wrapped in
//! [`NodeId`], so node ids survive a round trip through edge-list files
//! and CLI arguments unchanged.

mod id;

pub use id::NodeId;
