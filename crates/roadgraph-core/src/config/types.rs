//! Document type definitions

use crate::graph::{Cost, GraphKind};
use serde::{Deserialize, Serialize};

/// On-disk description of a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// One-way edges when true
    #[serde(default)]
    pub directed: bool,

    /// Node labels, inserted in this order
    #[serde(default)]
    pub nodes: Vec<String>,

    /// Edges, added in this order
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// A single edge in a graph document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,

    /// Defaults to 1 when omitted
    #[serde(default)]
    pub cost: Cost,
}

/// On-disk description of a libraries-versus-roads problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadsDocument {
    pub cities: u32,
    pub library_cost: u64,
    pub road_cost: u64,

    /// Pairs of 1-based city ids
    #[serde(default)]
    pub roads: Vec<[u32; 2]>,
}

/// Serialization format of a document, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Toml,
    Json,
}

impl GraphDocument {
    pub fn kind(&self) -> GraphKind {
        if self.directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        }
    }
}
