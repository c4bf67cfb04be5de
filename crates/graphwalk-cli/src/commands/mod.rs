//! CLI command implementations.

pub mod demo;
pub mod info;
pub mod query;
pub mod render;

use std::path::Path;

use anyhow::{Context as _, Result};
use graphwalk_engine::{Config, GraphWalker};

use crate::OutputFormat;
use crate::output::Format;

/// Settings shared by every command.
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// Selected output format.
    pub fn format(&self) -> Format {
        self.format.into()
    }

    /// Loads an edge-list file with the active configuration.
    pub fn open(&self, path: &Path) -> Result<GraphWalker> {
        GraphWalker::open_with_config(path, self.config.clone())
            .with_context(|| format!("failed to load edge list {}", path.display()))
    }
}
