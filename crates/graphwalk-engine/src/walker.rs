//! GraphWalker: a built graph and the queries that run against it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use graphwalk_adapters::plugins::algorithms;
use graphwalk_adapters::render::RenderFormat;
use graphwalk_adapters::storage::load_edge_list;
use graphwalk_common::types::NodeId;
use graphwalk_common::utils::error::Result;
use graphwalk_core::{GraphStatistics, GraphStore, UndirectedGraph};
use tracing::{debug, info};

use crate::config::Config;

/// An immutable graph together with its configuration.
///
/// All queries take `&self` and never change the graph, so a walker (or a
/// clone of its [`Arc`]ed graph) can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use graphwalk_engine::GraphWalker;
///
/// let walker = GraphWalker::from_edges([(0u64, 1u64), (0, 2), (1, 3), (1, 4), (2, 5), (3, 4)]);
///
/// assert_eq!(walker.degree(1u64)?, 3);
/// assert_eq!(walker.shortest_path(0u64, 4u64)?.len(), 3);
/// # Ok::<(), graphwalk_common::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphWalker {
    /// Configuration.
    config: Config,
    /// The graph every query runs against.
    graph: Arc<UndirectedGraph>,
}

impl GraphWalker {
    /// Wraps an already built graph with the default configuration.
    #[must_use]
    pub fn new(graph: UndirectedGraph) -> Self {
        Self {
            config: Config::default(),
            graph: Arc::new(graph),
        }
    }

    /// Wraps a graph with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn with_config(graph: UndirectedGraph, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            graph: Arc::new(graph),
        })
    }

    /// Builds a graph from an edge sequence.
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<NodeId>,
        B: Into<NodeId>,
    {
        let graph = UndirectedGraph::from_edges(edges);
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Self::new(graph)
    }

    /// Loads a graph from an edge-list file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(load_edge_list(path)?))
    }

    /// Loads a graph from an edge-list file with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the
    /// configuration does not validate.
    pub fn open_with_config(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        Self::with_config(load_edge_list(path)?, config)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the underlying graph.
    ///
    /// This provides direct access to the store for custom algorithms.
    #[must_use]
    pub fn graph(&self) -> &Arc<UndirectedGraph> {
        &self.graph
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns all nodes in first-seen order.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeId> {
        self.graph.nodes().collect()
    }

    /// Returns every undirected edge once.
    #[must_use]
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.graph.edges().collect()
    }

    /// Returns size and degree statistics.
    #[must_use]
    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics::collect(&self.graph)
    }

    /// Returns the degree of a node.
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if the node is not in the graph.
    pub fn degree(&self, node: impl Into<NodeId>) -> Result<usize> {
        let node = node.into();
        let degree = algorithms::degree(self.graph.as_ref(), node)?;
        self.log_query("degree", &format!("node={node} degree={degree}"));
        Ok(degree)
    }

    /// Returns the depth-first visit order from `start`.
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if `start` is not in the graph.
    pub fn dfs(&self, start: impl Into<NodeId>) -> Result<Vec<NodeId>> {
        let start = start.into();
        let order = algorithms::dfs(self.graph.as_ref(), start)?;
        self.log_query("dfs", &format!("start={start} visited={}", order.len()));
        Ok(order)
    }

    /// Returns the breadth-first visit order from `start`.
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if `start` is not in the graph.
    pub fn bfs(&self, start: impl Into<NodeId>) -> Result<Vec<NodeId>> {
        let start = start.into();
        let order = algorithms::bfs(self.graph.as_ref(), start)?;
        self.log_query("bfs", &format!("start={start} visited={}", order.len()));
        Ok(order)
    }

    /// Returns a shortest path, or an empty vector if none exists.
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if either node is not in the graph.
    pub fn shortest_path(
        &self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> Result<Vec<NodeId>> {
        let (source, target) = (source.into(), target.into());
        let path = algorithms::shortest_path(self.graph.as_ref(), source, target)?;
        self.log_query(
            "shortest_path",
            &format!("source={source} target={target} length={}", path.len()),
        );
        Ok(path)
    }

    /// Returns the connected components.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<NodeId>> {
        algorithms::connected_components(self.graph.as_ref())
    }

    /// Renders the graph to the configured path and returns that path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn visualize(&self) -> Result<PathBuf> {
        let path = self.config.render_path.clone();
        self.render_to(&path)?;
        Ok(path)
    }

    /// Renders the graph to `path` using the configured options.
    ///
    /// The format is the configured one, or else inferred from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn render_to(&self, path: &Path) -> Result<()> {
        let format = self
            .config
            .render_format
            .or_else(|| RenderFormat::from_path(path))
            .unwrap_or(RenderFormat::Svg);
        debug!(path = %path.display(), ?format, "rendering graph");
        format
            .renderer(&self.config.render_options())
            .render_to_file(&self.graph, path)
    }

    fn log_query(&self, operation: &str, detail: &str) {
        if self.config.query_logging {
            info!(operation, detail, "query");
        } else {
            debug!(operation, detail, "query");
        }
    }
}
