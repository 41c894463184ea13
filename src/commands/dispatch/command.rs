//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use roadgraph_core::config::GraphDocument;
use roadgraph_core::error::Result;
use roadgraph_core::graph::Graph;
use roadgraph_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load and build the graph described by a document
    pub fn load_graph(&self, path: &Path) -> Result<Graph> {
        let load_start = Instant::now();
        let graph = GraphDocument::load(path)?.build()?;
        trace_time!(load_start, "load_graph", nodes = graph.len());
        tracing::debug!(
            elapsed = ?self.start.elapsed(),
            kind = %graph.kind(),
            nodes = graph.len(),
            edges = graph.edge_count(),
            "graph_ready"
        );
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("roadgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Weighted graph traversals, spanning trees and shortest paths.");
        println!();
        println!("Run `roadgraph --help` for usage information.");
        Ok(())
    }
}
