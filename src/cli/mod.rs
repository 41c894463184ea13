//! CLI argument parsing for roadgraph
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};

pub use args::{GraphArgs, RoadsArgs, ShortestArgs, TraverseArgs};
use parse::parse_format;
pub use roadgraph_core::format::OutputFormat;

/// Roadgraph - weighted graph toolkit
#[derive(Parser, Debug)]
#[command(name = "roadgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log algorithm progress at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. trace, roadgraph_core=debug)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level roadgraph commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Depth-first visitation order from a start node
    Dfs(TraverseArgs),

    /// Breadth-first visitation order from a start node
    Bfs(TraverseArgs),

    /// Breadth-first order recorded at discovery
    Zigzag(TraverseArgs),

    /// Split an undirected graph into connected components
    Partitions(GraphArgs),

    /// Minimum spanning forest of an undirected graph
    Mst(GraphArgs),

    /// Cheapest distances from a source node
    Shortest(ShortestArgs),

    /// Print the adjacency lists of a graph
    Dump(GraphArgs),

    /// Plan library and road repairs for a city network
    Roads(RoadsArgs),
}
