//! `roadgraph dump` command - adjacency lists

use std::io::{self, Write};

use crate::cli::Cli;
use crate::commands::format::output_by_format;
use roadgraph_core::error::Result;
use roadgraph_core::graph::Graph;
use roadgraph_core::records;

/// Execute the dump command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    output_by_format!(cli.format,
        json => {
            let nodes = graph
                .nodes()
                .map(|node| {
                    Ok(serde_json::json!({
                        "label": node,
                        "adjacency": graph.adjacency(node)?,
                    }))
                })
                .collect::<Result<Vec<serde_json::Value>>>()?;
            let value = serde_json::json!({
                "kind": graph.kind(),
                "nodes": nodes,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        },
        human => {
            graph.dump(&mut out)?;
        },
        records => {
            writeln!(
                out,
                "{}",
                records::header(
                    "dump",
                    &[
                        ("kind", graph.kind().to_string()),
                        ("nodes", graph.len().to_string()),
                        ("edges", graph.edge_count().to_string()),
                    ]
                )
            )?;
            for node in graph.nodes() {
                writeln!(out, "{}", records::node_line(node))?;
            }
            for edge in graph.edges() {
                writeln!(out, "{}", records::edge_line(&edge))?;
            }
        }
    );

    out.flush()?;
    Ok(())
}
