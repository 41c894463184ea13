use crate::error::Result;
use crate::graph::types::{Cost, Node};
use crate::graph::GraphProvider;
use serde::{Serialize, Serializer};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};
use std::fmt;

/// Shortest known distance from the source to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    Reachable(Cost),
    /// No path from the source exists
    Unreachable,
}

impl Distance {
    pub fn cost(&self) -> Option<Cost> {
        match self {
            Distance::Reachable(cost) => Some(*cost),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Reachable(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reachable(cost) => write!(f, "{}", cost),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Distance::Reachable(cost) => serializer.serialize_some(&cost.value()),
            Distance::Unreachable => serializer.serialize_none(),
        }
    }
}

/// Result of a single-source shortest-path run
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: Node,
    distances: BTreeMap<Node, Distance>,
    predecessors: HashMap<Node, Node>,
}

impl ShortestPaths {
    pub fn source(&self) -> &Node {
        &self.source
    }

    /// Distance to `node`, or `None` if the node was not in the graph
    pub fn distance(&self, node: &Node) -> Option<Distance> {
        self.distances.get(node).copied()
    }

    /// Every node with its distance, ascending by label
    pub fn distances(&self) -> impl Iterator<Item = (&Node, Distance)> {
        self.distances
            .iter()
            .map(|(node, distance)| (node, *distance))
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_reachable()).count()
    }

    /// Cheapest node sequence from the source to `target`, both included.
    ///
    /// `None` when `target` is unreachable or unknown.
    pub fn path_to(&self, target: &Node) -> Option<Vec<Node>> {
        if !self.distance(target)?.is_reachable() {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while current != &self.source {
            current = self.predecessors.get(current)?;
            path.push(current.clone());
        }
        path.reverse();
        Some(path)
    }
}

/// Frontier entry for the min-heap (ordered by accumulated cost, then label)
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapEntry<'a> {
    node: &'a Node,
    accumulated_cost: Cost,
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.node.cmp(other.node))
    }
}

/// Single-source shortest distances from `start` (Dijkstra).
///
/// Edge costs are nonnegative by construction. The frontier is a binary
/// heap with lazy deletion: stale entries are skipped when popped. Nodes
/// never reached keep [`Distance::Unreachable`]. Fails with a missing-node
/// error if `start` is not in the graph.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn dijkstra(provider: &dyn GraphProvider, start: &Node) -> Result<ShortestPaths> {
    let source = provider.get_node(start)?;

    let mut best: HashMap<&Node, Cost> = HashMap::new();
    let mut predecessors: HashMap<&Node, &Node> = HashMap::new();
    let mut settled: HashSet<&Node> = HashSet::new();
    let mut heap = BinaryHeap::new();

    best.insert(source, Cost::ZERO);
    heap.push(Reverse(HeapEntry {
        node: source,
        accumulated_cost: Cost::ZERO,
    }));

    while let Some(Reverse(HeapEntry {
        node: current,
        accumulated_cost,
    })) = heap.pop()
    {
        if !settled.insert(current) {
            continue;
        }
        tracing::trace!(node = %current, cost = %accumulated_cost, "settle");

        for entry in provider.get_outbound(current)? {
            let neighbor = &entry.node;
            if settled.contains(neighbor) {
                continue;
            }

            let candidate = accumulated_cost + entry.cost;
            if best.get(neighbor).is_none_or(|known| candidate < *known) {
                best.insert(neighbor, candidate);
                predecessors.insert(neighbor, current);
                heap.push(Reverse(HeapEntry {
                    node: neighbor,
                    accumulated_cost: candidate,
                }));
            }
        }
    }

    let distances: BTreeMap<Node, Distance> = provider
        .get_nodes()
        .into_iter()
        .map(|node| {
            let distance = if settled.contains(node) {
                best.get(node)
                    .map_or(Distance::Unreachable, |cost| Distance::Reachable(*cost))
            } else {
                Distance::Unreachable
            };
            (node.clone(), distance)
        })
        .collect();

    tracing::debug!(
        settled = settled.len(),
        nodes = distances.len(),
        "dijkstra_complete"
    );

    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors: predecessors
            .into_iter()
            .map(|(node, via)| (node.clone(), via.clone()))
            .collect(),
    })
}
