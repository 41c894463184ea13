use crate::bail_unsupported;
use crate::error::Result;
use crate::graph::algos::shared::depth_first_walk;
use crate::graph::Graph;
use std::collections::HashSet;

/// Split an undirected graph into its connected components.
///
/// Returns one induced subgraph per component, each an independent copy
/// holding the component's nodes and their adjacency entries. Components
/// come out in the order their first node was inserted. Directed graphs
/// are rejected.
#[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
pub fn partitions(graph: &Graph) -> Result<Vec<Graph>> {
    if graph.is_directed() {
        bail_unsupported!(
            "partitions",
            "components can only be traversed in undirected graphs"
        );
    }

    let mut unvisited: HashSet<_> = graph.nodes().collect();
    let mut components = Vec::new();

    for seed in graph.nodes() {
        if !unvisited.contains(seed) {
            continue;
        }

        let mut visited = HashSet::new();
        depth_first_walk(graph, seed, &mut visited, |node| {
            unvisited.remove(node);
        })?;

        tracing::trace!(seed = %seed, size = visited.len(), "component_found");
        components.push(graph.induced(|node| visited.contains(node)));
    }

    tracing::debug!(components = components.len(), "partitions_complete");
    Ok(components)
}
