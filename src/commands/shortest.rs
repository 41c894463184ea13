//! `roadgraph shortest` command - single-source distances

use std::collections::BTreeMap;

use crate::cli::{Cli, ShortestArgs};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::format::output_by_format_result;
use roadgraph_core::error::Result;
use roadgraph_core::graph::{dijkstra, Distance, Graph, Node, ShortestPaths};
use roadgraph_core::records;

/// Execute the shortest command
pub fn execute(ctx: &CommandContext, args: &ShortestArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.input.graph)?;
    let from = Node::new(args.from.as_str());
    let paths = dijkstra(&graph, &from)?;

    tracing::debug!(
        reachable = paths.reachable_count(),
        nodes = graph.len(),
        "shortest_complete"
    );

    match &args.to {
        Some(target) => output_path(ctx.cli, &graph, &paths, &Node::new(target.as_str())),
        None => output_distances(ctx.cli, &paths),
    }
}

fn output_distances(cli: &Cli, paths: &ShortestPaths) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            let distances: BTreeMap<&str, Distance> = paths
                .distances()
                .map(|(node, distance)| (node.label(), distance))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "from": paths.source(),
                    "distances": distances,
                }))?
            );
            Ok(())
        },
        human => {
            for (node, distance) in paths.distances() {
                println!("{}: {}", node, distance);
            }
        },
        records => {
            println!(
                "{}",
                records::header(
                    "shortest",
                    &[
                        ("from", records::label_field(paths.source())),
                        ("reachable", paths.reachable_count().to_string()),
                    ]
                )
            );
            for (node, distance) in paths.distances() {
                println!("{}", records::datum_line(node, "distance", distance));
            }
        }
    )
}

fn output_path(cli: &Cli, graph: &Graph, paths: &ShortestPaths, target: &Node) -> Result<()> {
    let target = graph.get(target)?;
    let path = paths.path_to(target);
    let distance = paths.distance(target).unwrap_or(Distance::Unreachable);

    output_by_format_result!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "from": paths.source(),
                    "to": target,
                    "distance": distance,
                    "path": path,
                }))?
            );
            Ok(())
        },
        human => {
            match &path {
                Some(nodes) => {
                    let labels: Vec<&str> = nodes.iter().map(|node| node.label()).collect();
                    println!("{} ({})", labels.join(" -> "), distance);
                }
                None => println!("{} is unreachable from {}", target, paths.source()),
            }
        },
        records => {
            println!(
                "{}",
                records::header(
                    "shortest.path",
                    &[
                        ("from", records::label_field(paths.source())),
                        ("to", records::label_field(target)),
                        ("distance", distance.to_string()),
                    ]
                )
            );
            for node in path.iter().flatten() {
                println!("{}", records::node_line(node));
            }
        }
    )
}
