//! Graph and problem documents
//!
//! Graphs and roads problems are described in TOML by default, or JSON
//! when the file ends in `.json`:
//!
//! ```toml
//! directed = false
//! nodes = ["a", "b", "c"]
//!
//! [[edges]]
//! from = "a"
//! to = "b"
//! cost = 5
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Node};
use crate::roads::CostModel;

pub use types::{DocumentFormat, EdgeSpec, GraphDocument, RoadsDocument};

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Toml,
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T> {
        match self {
            DocumentFormat::Toml => Ok(toml::from_str(content)?),
            DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| GraphError::invalid_document(path, format!("cannot read: {}", e)))?;
    DocumentFormat::from_path(path)
        .parse(&content)
        .map_err(|e| GraphError::invalid_document(path, e))
}

impl GraphDocument {
    /// Load a graph document from a file
    pub fn load(path: &Path) -> Result<Self> {
        let document: GraphDocument = load_document(path)?;
        tracing::debug!(
            path = %path.display(),
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            "graph_document_loaded"
        );
        Ok(document)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        DocumentFormat::Toml.parse(content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        DocumentFormat::Json.parse(content)
    }

    /// Build the described graph: nodes first, then edges, both in
    /// document order. Duplicate or undeclared nodes fail.
    pub fn build(&self) -> Result<Graph> {
        let mut graph = Graph::new(self.kind());
        graph.add_nodes(self.nodes.iter().map(Node::new))?;
        for edge in &self.edges {
            graph.add_edge_with_cost(&Node::new(&edge.from), &Node::new(&edge.to), edge.cost)?;
        }
        Ok(graph)
    }
}

impl RoadsDocument {
    /// Load a roads problem from a file
    pub fn load(path: &Path) -> Result<Self> {
        load_document(path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        DocumentFormat::Toml.parse(content)
    }

    pub fn costs(&self) -> CostModel {
        CostModel::new(self.library_cost, self.road_cost)
    }

    pub fn road_pairs(&self) -> Vec<(u32, u32)> {
        self.roads.iter().map(|[a, b]| (*a, *b)).collect()
    }
}
