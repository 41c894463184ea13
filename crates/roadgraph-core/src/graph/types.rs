use serde::{Deserialize, Serialize};
use std::fmt;

/// Cost of traversing a single edge.
///
/// Costs are nonnegative integers. Edges added without an explicit cost
/// carry [`Cost::DEFAULT`]. Addition saturates at `u64::MAX` so summing
/// long paths never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);
    pub const DEFAULT: Cost = Cost(1);

    pub fn new(cost: u64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0.saturating_add(other.0))
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |acc, cost| acc + cost)
    }
}

impl From<u64> for Cost {
    fn from(cost: u64) -> Self {
        Cost(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labelled vertex.
///
/// Equality, hashing and ordering all come from the label, so two nodes
/// built from the same label are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node(String);

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Node(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Node {
    fn from(label: &str) -> Self {
        Node::new(label)
    }
}

/// A directed `origin -> terminus` relation with its cost.
///
/// Edges are produced on demand by [`Graph::edges`](super::Graph::edges);
/// the graph itself stores adjacency entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub origin: Node,
    pub terminus: Node,
    pub cost: Cost,
}

impl Edge {
    pub fn new(origin: Node, terminus: Node, cost: Cost) -> Self {
        Edge {
            origin,
            terminus,
            cost,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.origin, self.terminus, self.cost)
    }
}

/// Whether edges are one-way or two-way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Directed,
    #[default]
    Undirected,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}
