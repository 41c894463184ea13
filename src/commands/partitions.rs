//! `roadgraph partitions` command - connected components

use crate::cli::Cli;
use crate::commands::format::output_by_format_result;
use roadgraph_core::error::Result;
use roadgraph_core::graph::{partitions, Graph, Node};
use roadgraph_core::records;

/// Execute the partitions command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let components: Vec<Vec<Node>> = partitions(graph)?
        .iter()
        .map(|component| {
            let mut nodes: Vec<Node> = component.nodes().cloned().collect();
            nodes.sort();
            nodes
        })
        .collect();

    output_by_format_result!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "count": components.len(),
                    "components": components,
                }))?
            );
            Ok(())
        },
        human => {
            if components.is_empty() && !cli.quiet {
                println!("Graph has no nodes");
            }
            for (index, nodes) in components.iter().enumerate() {
                let labels: Vec<&str> = nodes.iter().map(|node| node.label()).collect();
                println!("{}: {}", index + 1, labels.join(" "));
            }
        },
        records => {
            println!(
                "{}",
                records::header("partitions", &[("components", components.len().to_string())])
            );
            for (index, nodes) in components.iter().enumerate() {
                for node in nodes {
                    println!("{}", records::datum_line(node, "component", index + 1));
                }
            }
        }
    )
}
