//! Command argument structures

use std::path::PathBuf;

use clap::Args;

use crate::cli::parse::parse_road;

/// Arguments for commands that only need a graph document.
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Graph document (TOML, or JSON with a .json extension)
    pub graph: PathBuf,
}

/// Arguments for the dfs, bfs and zigzag commands.
#[derive(Args, Debug)]
pub struct TraverseArgs {
    #[command(flatten)]
    pub input: GraphArgs,

    /// Node to start from
    #[arg(long, short)]
    pub start: String,
}

/// Arguments for the shortest command.
#[derive(Args, Debug)]
pub struct ShortestArgs {
    #[command(flatten)]
    pub input: GraphArgs,

    /// Source node
    #[arg(long)]
    pub from: String,

    /// Only report the cheapest path to this node
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for the roads command.
///
/// Either `--file` or the inline flags describe the network. Inline flags
/// override values read from the file.
#[derive(Args, Debug)]
pub struct RoadsArgs {
    /// Roads document (TOML, or JSON with a .json extension)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Number of cities, numbered from 1
    #[arg(long)]
    pub cities: Option<u32>,

    /// Cost of rebuilding one library
    #[arg(long)]
    pub library_cost: Option<u64>,

    /// Cost of rebuilding one road
    #[arg(long)]
    pub road_cost: Option<u64>,

    /// Road between two cities, as A-B (repeatable)
    #[arg(long, value_parser = parse_road, action = clap::ArgAction::Append)]
    pub road: Vec<(u32, u32)>,
}
