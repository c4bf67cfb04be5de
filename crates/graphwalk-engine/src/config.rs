//! Configuration for Graphwalk.

use std::path::{Path, PathBuf};

use graphwalk_adapters::render::{
    DEFAULT_RENDER_PATH, DEFAULT_TITLE, RenderFormat, RenderOptions, SpringLayout,
};
use graphwalk_common::utils::error::{Error, Result};
use serde::Deserialize;

/// Graphwalk configuration.
///
/// Every field has a default, so a TOML file only needs the keys it
/// changes:
///
/// ```toml
/// render_path = "out/graph.dot"
/// layout_iterations = 100
/// query_logging = true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File the visualizer writes to.
    pub render_path: PathBuf,

    /// Output format. `None` infers it from the extension of `render_path`,
    /// falling back to SVG.
    pub render_format: Option<RenderFormat>,

    /// Force-directed layout iterations.
    pub layout_iterations: usize,

    /// Canvas width in pixels.
    pub canvas_width: u32,

    /// Canvas height in pixels.
    pub canvas_height: u32,

    /// Title drawn above the graph.
    pub title: String,

    /// Log every query at INFO instead of DEBUG.
    pub query_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render_path: PathBuf::from(DEFAULT_RENDER_PATH),
            render_format: None,
            layout_iterations: SpringLayout::DEFAULT_ITERATIONS,
            canvas_width: 800,
            canvas_height: 600,
            title: DEFAULT_TITLE.to_string(),
            query_logging: false,
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the text is not valid TOML, has
    /// unknown keys, or fails [`validate`](Self::validate).
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise the same
    /// errors as [`from_toml`](Self::from_toml).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Sets the render output path.
    #[must_use]
    pub fn with_render_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.render_path = path.into();
        self
    }

    /// Forces an output format regardless of the path's extension.
    #[must_use]
    pub fn with_render_format(mut self, format: RenderFormat) -> Self {
        self.render_format = Some(format);
        self
    }

    /// Sets the number of layout iterations.
    #[must_use]
    pub fn with_layout_iterations(mut self, iterations: usize) -> Self {
        self.layout_iterations = iterations;
        self
    }

    /// Sets the canvas size in pixels.
    #[must_use]
    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Sets the image title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enables INFO-level query logging.
    #[must_use]
    pub fn with_query_logging(mut self) -> Self {
        self.query_logging = true;
        self
    }

    /// Checks the configuration for values no renderer can use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a zero canvas dimension.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas size must be non-zero, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        Ok(())
    }

    /// Returns the effective render format.
    #[must_use]
    pub fn effective_render_format(&self) -> RenderFormat {
        self.render_format
            .or_else(|| RenderFormat::from_path(&self.render_path))
            .unwrap_or(RenderFormat::Svg)
    }

    /// Returns the renderer settings derived from this configuration.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.canvas_width,
            height: self.canvas_height,
            title: self.title.clone(),
            layout_iterations: self.layout_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.render_path, PathBuf::from("graph_visualization.svg"));
        assert_eq!(config.effective_render_format(), RenderFormat::Svg);
        assert_eq!(config.layout_iterations, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::default()
            .with_render_path("out.dot")
            .with_canvas_size(320, 240)
            .with_title("Demo")
            .with_layout_iterations(10)
            .with_query_logging();

        assert_eq!(config.effective_render_format(), RenderFormat::Dot);
        let options = config.render_options();
        assert_eq!((options.width, options.height), (320, 240));
        assert_eq!(options.title, "Demo");
        assert_eq!(options.layout_iterations, 10);
        assert!(config.query_logging);

        let forced = config.with_render_format(RenderFormat::Svg);
        assert_eq!(forced.effective_render_format(), RenderFormat::Svg);
    }

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml(
            r#"
            render_path = "g.gv"
            render_format = "svg"
            canvas_width = 1024
            query_logging = true
            "#,
        )
        .unwrap();

        assert_eq!(config.render_path, PathBuf::from("g.gv"));
        assert_eq!(config.effective_render_format(), RenderFormat::Svg);
        assert_eq!(config.canvas_width, 1024);
        assert_eq!(config.canvas_height, 600);
        assert!(config.query_logging);
    }

    #[test]
    fn test_from_toml_rejects_bad_input() {
        assert!(matches!(
            Config::from_toml("canvas_height = 0"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_toml("no_such_key = 1"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_toml("render_format = \"png\""),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        std::fs::write(&path, "title = \"From file\"\n").unwrap();

        assert_eq!(Config::load(&path).unwrap().title, "From file");
        assert!(matches!(
            Config::load(dir.path().join("missing.toml")),
            Err(Error::Io(_))
        ));
    }
}
