//! Adjacency-list graph storage
//!
//! A [`Graph`] maps every node to the ordered list of `(neighbor, cost)`
//! entries added for it. Directed and undirected graphs share this storage;
//! an undirected edge is recorded once in each direction.

use std::collections::HashMap;
use std::io::{self, Write};

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::types::{Cost, Edge, GraphKind, Node};

/// One outgoing entry in a node's adjacency list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjacency {
    pub node: Node,
    pub cost: Cost,
}

/// Adjacency-list graph.
///
/// Nodes keep their insertion order, and so does each adjacency list.
/// Parallel edges are allowed: adding `a -> b` twice leaves two entries.
#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,
    nodes: Vec<Node>,
    positions: HashMap<Node, usize>,
    adjacency: Vec<Vec<Adjacency>>,
}

impl Graph {
    pub fn new(kind: GraphKind) -> Self {
        Graph {
            kind,
            nodes: Vec::new(),
            positions: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.positions.contains_key(node)
    }

    /// Insert a node with an empty adjacency list.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if an equal node is present;
    /// the graph is left untouched in that case.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.contains(&node) {
            return Err(GraphError::duplicate_node(&node));
        }
        self.positions.insert(node.clone(), self.nodes.len());
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Insert several nodes, stopping at the first duplicate.
    ///
    /// Nodes inserted before the failure stay in the graph.
    pub fn add_nodes<I>(&mut self, nodes: I) -> Result<()>
    where
        I: IntoIterator<Item = Node>,
    {
        for node in nodes {
            self.add_node(node)?;
        }
        Ok(())
    }

    /// Add an edge with the default cost of 1
    pub fn add_edge(&mut self, origin: &Node, terminus: &Node) -> Result<()> {
        self.add_edge_with_cost(origin, terminus, Cost::DEFAULT)
    }

    /// Add an edge from `origin` to `terminus`.
    ///
    /// Both endpoints must already be present. Undirected graphs also record
    /// the reverse entry. Repeated calls add parallel entries.
    pub fn add_edge_with_cost(&mut self, origin: &Node, terminus: &Node, cost: Cost) -> Result<()> {
        let from = self.position(origin)?;
        let to = self.position(terminus)?;

        self.adjacency[from].push(Adjacency {
            node: terminus.clone(),
            cost,
        });
        if self.kind == GraphKind::Undirected {
            self.adjacency[to].push(Adjacency {
                node: origin.clone(),
                cost,
            });
        }
        Ok(())
    }

    /// All nodes in insertion order. Not sorted.
    pub fn nodes(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// The stored node equal to `node`
    pub fn get(&self, node: &Node) -> Result<&Node> {
        let position = self.position(node)?;
        Ok(&self.nodes[position])
    }

    /// Raw adjacency entries of `node`, in the order they were added
    pub fn adjacency(&self, node: &Node) -> Result<&[Adjacency]> {
        let position = self.position(node)?;
        Ok(&self.adjacency[position])
    }

    /// Adjacent nodes sorted ascending by label.
    ///
    /// Parallel edges yield the same neighbor more than once.
    pub fn neighbors(&self, node: &Node) -> Result<std::vec::IntoIter<&Node>> {
        let mut neighbors: Vec<&Node> = self
            .adjacency(node)?
            .iter()
            .map(|entry| &entry.node)
            .collect();
        neighbors.sort();
        Ok(neighbors.into_iter())
    }

    /// Enumerate edges node by node, preserving adjacency order.
    ///
    /// Undirected graphs emit each edge once, from its lower-labelled end
    /// (`origin < terminus`). Undirected self-loops are therefore skipped.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let undirected = self.kind == GraphKind::Undirected;
        self.nodes
            .iter()
            .zip(self.adjacency.iter())
            .flat_map(|(origin, entries)| entries.iter().map(move |entry| (origin, entry)))
            .filter(move |(origin, entry)| !undirected || *origin < &entry.node)
            .map(|(origin, entry)| Edge::new(origin.clone(), entry.node.clone(), entry.cost))
    }

    /// Number of edges [`Graph::edges`] yields
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Sum of the costs of every edge [`Graph::edges`] yields
    pub fn total_cost(&self) -> Cost {
        self.edges().map(|edge| edge.cost).sum()
    }

    /// Debug rendering of the adjacency lists.
    ///
    /// The format is for people, not parsers.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} graph, {} nodes", self.kind, self.len())?;
        for (node, entries) in self.nodes.iter().zip(self.adjacency.iter()) {
            let rendered: Vec<String> = entries
                .iter()
                .map(|entry| format!("{}({})", entry.node, entry.cost))
                .collect();
            writeln!(out, "  {}: [{}]", node, rendered.join(", "))?;
        }
        Ok(())
    }

    pub(crate) fn position(&self, node: &Node) -> Result<usize> {
        self.positions
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::missing_node(node))
    }

    /// Copy of this graph keeping only the nodes `keep` accepts, with the
    /// adjacency entries between kept nodes.
    pub(crate) fn induced<F>(&self, keep: F) -> Graph
    where
        F: Fn(&Node) -> bool,
    {
        let mut subgraph = Graph::new(self.kind);
        for (node, entries) in self.nodes.iter().zip(self.adjacency.iter()) {
            if !keep(node) {
                continue;
            }
            let position = subgraph.nodes.len();
            subgraph.positions.insert(node.clone(), position);
            subgraph.nodes.push(node.clone());
            let kept: Vec<Adjacency> = entries
                .iter()
                .filter(|entry| keep(&entry.node))
                .cloned()
                .collect();
            subgraph.adjacency.push(kept);
        }
        subgraph
    }

    /// Same kind and nodes, no edges
    pub(crate) fn without_edges(&self) -> Graph {
        self.induced(|_| true).cleared()
    }

    fn cleared(mut self) -> Graph {
        for entries in &mut self.adjacency {
            entries.clear();
        }
        self
    }
}
