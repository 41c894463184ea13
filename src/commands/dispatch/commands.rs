//! Command implementations for all roadgraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::traverse::Order;
use crate::commands::{dump, mst, partitions, roads, shortest, traverse};
use roadgraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Dfs(args) => traverse::execute(ctx, args, Order::Depth),
            Commands::Bfs(args) => traverse::execute(ctx, args, Order::Breadth),
            Commands::Zigzag(args) => traverse::execute(ctx, args, Order::Zigzag),
            Commands::Partitions(args) => {
                let graph = ctx.load_graph(&args.graph)?;
                partitions::execute(ctx.cli, &graph)
            }
            Commands::Mst(args) => {
                let graph = ctx.load_graph(&args.graph)?;
                mst::execute(ctx.cli, &graph)
            }
            Commands::Shortest(args) => shortest::execute(ctx, args),
            Commands::Dump(args) => {
                let graph = ctx.load_graph(&args.graph)?;
                dump::execute(ctx.cli, &graph)
            }
            Commands::Roads(args) => roads::execute(ctx.cli, args),
        }
    }
}
