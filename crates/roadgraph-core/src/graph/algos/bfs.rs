use crate::error::Result;
use crate::graph::types::Node;
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

/// When a node enters the output of a breadth-first pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordAt {
    /// When the node leaves the queue
    Dequeue,
    /// When the node is first discovered and enqueued
    Discovery,
}

fn breadth_first(
    provider: &dyn GraphProvider,
    start: &Node,
    record: RecordAt,
) -> Result<Vec<Node>> {
    let start = provider.get_node(start)?;

    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    let mut order = Vec::new();

    // start is marked before its own neighbors are scanned, so a self-loop
    // cannot re-enqueue it
    queue.push_back(start);
    visited.insert(start);
    if record == RecordAt::Discovery {
        order.push(start.clone());
    }

    while let Some(front) = queue.pop_front() {
        if record == RecordAt::Dequeue {
            order.push(front.clone());
        }

        for neighbor in provider.get_sorted_neighbors(front)? {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
                if record == RecordAt::Discovery {
                    order.push(neighbor.clone());
                }
            }
        }
    }

    tracing::debug!(visited = order.len(), ?record, "bfs_complete");
    Ok(order)
}

/// Breadth-first visitation order from `start`.
///
/// Each level is visited left to right by ascending label. Fails with a
/// missing-node error if `start` is not in the graph.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn bfs(provider: &dyn GraphProvider, start: &Node) -> Result<Vec<Node>> {
    breadth_first(provider, start, RecordAt::Dequeue)
}

/// Breadth-first order recorded at discovery time.
///
/// Nodes are recorded when first enqueued rather than when processed. With
/// a FIFO queue that is the same sequence [`bfs`] produces; levels are not
/// reversed.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn bfs_zigzag(provider: &dyn GraphProvider, start: &Node) -> Result<Vec<Node>> {
    breadth_first(provider, start, RecordAt::Discovery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::algos::shared::concat_labels;
    use crate::graph::Graph;

    fn build(labels: &str, edges: &[(&str, &str)]) -> Graph {
        let mut gr = Graph::undirected();
        gr.add_nodes(labels.chars().map(|c| Node::new(c.to_string())))
            .unwrap();
        for (a, b) in edges {
            gr.add_edge(&Node::new(*a), &Node::new(*b)).unwrap();
        }
        gr
    }

    #[test]
    fn test_bfs_order() {
        let gr = build(
            "abcdefgh",
            &[
                ("a", "b"),
                ("a", "g"),
                ("a", "d"),
                ("b", "e"),
                ("b", "f"),
                ("c", "f"),
                ("c", "h"),
                ("d", "f"),
                ("e", "g"),
            ],
        );
        let order = bfs(&gr, &Node::new("a")).unwrap();
        assert_eq!(concat_labels(&order), "abdgefch");
    }

    #[test]
    fn test_bfs_missing_start() {
        let gr = Graph::undirected();
        let err = bfs(&gr, &Node::new("mr_lonely")).unwrap_err();
        assert!(matches!(err, GraphError::MissingNode { ref label } if label == "mr_lonely"));
        assert!(bfs_zigzag(&gr, &Node::new("mr_lonely")).is_err());
    }

    #[test]
    fn test_bfs_self_loop_terminates() {
        let mut gr = Graph::undirected();
        let a = Node::new("a");
        gr.add_node(a.clone()).unwrap();
        gr.add_edge(&a, &a).unwrap();

        assert_eq!(bfs(&gr, &a).unwrap(), vec![a.clone()]);
        assert_eq!(bfs_zigzag(&gr, &a).unwrap(), vec![a]);
    }

    #[test]
    fn test_zigzag_discovery_order() {
        let gr = build(
            "abcdefghij",
            &[
                ("a", "b"),
                ("a", "c"),
                ("b", "d"),
                ("b", "e"),
                ("c", "f"),
                ("d", "g"),
                ("d", "h"),
                ("f", "i"),
                ("f", "j"),
            ],
        );
        let a = Node::new("a");
        let zigzag = bfs_zigzag(&gr, &a).unwrap();
        assert_eq!(concat_labels(&zigzag), "abcdefghij");
        assert_eq!(zigzag, bfs(&gr, &a).unwrap());
    }
}
