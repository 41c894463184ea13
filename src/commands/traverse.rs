//! `roadgraph dfs|bfs|zigzag` commands - visitation order from a start node

use crate::cli::{Cli, TraverseArgs};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::format::output_by_format_result;
use roadgraph_core::error::Result;
use roadgraph_core::graph::{bfs, bfs_zigzag, dfs, Node};
use roadgraph_core::records;

/// Which visitation order to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Depth,
    Breadth,
    Zigzag,
}

impl Order {
    fn mode(self) -> &'static str {
        match self {
            Order::Depth => "dfs",
            Order::Breadth => "bfs",
            Order::Zigzag => "zigzag",
        }
    }
}

/// Execute a traversal command
pub fn execute(ctx: &CommandContext, args: &TraverseArgs, order: Order) -> Result<()> {
    let graph = ctx.load_graph(&args.input.graph)?;
    let start = Node::new(args.start.as_str());

    let visited = match order {
        Order::Depth => dfs(&graph, &start)?,
        Order::Breadth => bfs(&graph, &start)?,
        Order::Zigzag => bfs_zigzag(&graph, &start)?,
    };

    output(ctx.cli, order, &start, &visited)
}

fn output(cli: &Cli, order: Order, start: &Node, visited: &[Node]) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "mode": order.mode(),
                    "start": start,
                    "order": visited,
                }))?
            );
            Ok(())
        },
        human => {
            let labels: Vec<&str> = visited.iter().map(|node| node.label()).collect();
            println!("{}", labels.join(" "));
        },
        records => {
            println!(
                "{}",
                records::header(
                    order.mode(),
                    &[
                        ("start", records::label_field(start)),
                        ("visited", visited.len().to_string()),
                    ]
                )
            );
            for node in visited {
                println!("{}", records::node_line(node));
            }
        }
    )
}
