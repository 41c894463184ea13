use crate::error::Result;
use crate::graph::algos::shared::depth_first_walk;
use crate::graph::types::Node;
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// Depth-first visitation order from `start`.
///
/// Iterative: neighbors are tried in ascending label order and only nodes
/// reachable from `start` are visited. Fails with a missing-node error if
/// `start` is not in the graph.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn dfs(provider: &dyn GraphProvider, start: &Node) -> Result<Vec<Node>> {
    let start = provider.get_node(start)?;

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    depth_first_walk(provider, start, &mut visited, |node| order.push(node.clone()))?;

    tracing::debug!(visited = order.len(), "dfs_complete");
    Ok(order)
}
