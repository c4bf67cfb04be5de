//! Graphwalk CLI - traverse and inspect undirected graphs from edge lists.
//!
//! Every command loads an edge-list file, runs one read-only query, and
//! prints the result as a table or JSON. `demo` runs the whole tour on a
//! built-in sample graph.

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use graphwalk_adapters::render::RenderFormat;
use graphwalk_engine::Config;

/// Graph traversal and inspection tool.
///
/// Edge-list files hold one edge per line: two integer node ids separated
/// by whitespace or a comma. `#` starts a comment.
#[derive(Parser)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suppress output and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Image formats for the `render` command.
#[derive(Clone, Copy, ValueEnum)]
enum ImageFormat {
    /// SVG image
    Svg,
    /// Graphviz DOT source
    Dot,
}

impl From<ImageFormat> for RenderFormat {
    fn from(f: ImageFormat) -> Self {
        match f {
            ImageFormat::Svg => RenderFormat::Svg,
            ImageFormat::Dot => RenderFormat::Dot,
        }
    }
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run every query on the built-in sample graph
    Demo {
        /// Also render the graph (to PATH, or the configured path)
        #[arg(long, num_args = 0..=1, value_name = "PATH")]
        render: Option<Option<PathBuf>>,
    },

    /// Show graph statistics (counts, degrees, components)
    Info {
        /// Path to the edge list
        path: PathBuf,
    },

    /// Show the degree of a node
    Degree {
        /// Path to the edge list
        path: PathBuf,

        /// Node id
        node: u64,
    },

    /// Depth-first traversal order from a start node
    Dfs {
        /// Path to the edge list
        path: PathBuf,

        /// Start node id
        start: u64,
    },

    /// Breadth-first traversal order from a start node
    Bfs {
        /// Path to the edge list
        path: PathBuf,

        /// Start node id
        start: u64,
    },

    /// Shortest path between two nodes
    Path {
        /// Path to the edge list
        path: PathBuf,

        /// Source node id
        source: u64,

        /// Target node id
        target: u64,
    },

    /// Render the graph to an image file
    Render {
        /// Path to the edge list
        path: PathBuf,

        /// Output file (defaults to the configured render path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Image format (defaults to the output file's extension)
        #[arg(long, value_name = "FORMAT")]
        image_format: Option<ImageFormat>,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity; logs go to stderr so JSON output
    // stays parseable.
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = load_config(cli.config.as_ref()).and_then(|config| {
        let ctx = commands::Context {
            config,
            format: cli.format,
            quiet: cli.quiet,
        };
        match cli.command {
            Commands::Demo { render } => commands::demo::run(&ctx, render),
            Commands::Info { path } => commands::info::run(&ctx, &path),
            Commands::Degree { path, node } => commands::query::degree(&ctx, &path, node),
            Commands::Dfs { path, start } => {
                commands::query::traverse(&ctx, &path, start, commands::query::Traversal::Dfs)
            }
            Commands::Bfs { path, start } => {
                commands::query::traverse(&ctx, &path, start, commands::query::Traversal::Bfs)
            }
            Commands::Path {
                path,
                source,
                target,
            } => commands::query::path(&ctx, &path, source, target),
            Commands::Render {
                path,
                output,
                image_format,
            } => commands::render::run(&ctx, &path, output, image_format.map(Into::into)),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
