//! `roadgraph mst` command - minimum spanning forest

use crate::cli::Cli;
use crate::commands::format::output_by_format_result;
use roadgraph_core::error::Result;
use roadgraph_core::graph::{kruskal, Edge, Graph};
use roadgraph_core::records;

/// Execute the mst command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let forest = kruskal(graph)?;
    let edges: Vec<Edge> = forest.edges().collect();
    let total = forest.total_cost();

    output_by_format_result!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "nodes": forest.len(),
                    "edges": edges,
                    "total": total,
                }))?
            );
            Ok(())
        },
        human => {
            for edge in &edges {
                println!("{} - {} ({})", edge.origin, edge.terminus, edge.cost);
            }
            if !cli.quiet {
                println!("total: {}", total);
            }
        },
        records => {
            println!(
                "{}",
                records::header(
                    "mst",
                    &[
                        ("nodes", forest.len().to_string()),
                        ("edges", edges.len().to_string()),
                        ("total", total.to_string()),
                    ]
                )
            );
            for edge in &edges {
                println!("{}", records::edge_line(edge));
            }
        }
    )
}
