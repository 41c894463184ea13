use crate::error::Result;
use crate::graph::adjacency::{Adjacency, Graph};
use crate::graph::types::Node;

/// Read-only view of a graph consumed by the traversal algorithms.
///
/// `dfs`, `bfs`, `bfs_zigzag` and `dijkstra` only read nodes and
/// neighbors, so they accept any provider. `partitions` and `kruskal`
/// build new [`Graph`] values from the input's storage and take `&Graph`.
pub trait GraphProvider {
    /// The stored node equal to `node`, or a missing-node error
    fn get_node(&self, node: &Node) -> Result<&Node>;
    /// Neighbors of `node` in ascending label order
    fn get_sorted_neighbors(&self, node: &Node) -> Result<Vec<&Node>>;
    /// Outgoing `(neighbor, cost)` entries of `node`
    fn get_outbound(&self, node: &Node) -> Result<&[Adjacency]>;
    fn get_nodes(&self) -> Vec<&Node>;
}

impl GraphProvider for Graph {
    fn get_node(&self, node: &Node) -> Result<&Node> {
        self.get(node)
    }

    fn get_sorted_neighbors(&self, node: &Node) -> Result<Vec<&Node>> {
        Ok(self.neighbors(node)?.collect())
    }

    fn get_outbound(&self, node: &Node) -> Result<&[Adjacency]> {
        self.adjacency(node)
    }

    fn get_nodes(&self) -> Vec<&Node> {
        self.nodes().collect()
    }
}
