//! Graph storage, traversal and optimization
//!
//! Provides the graph model and the algorithms that run over it:
//! - Adjacency-list storage for directed and undirected graphs
//! - DFS, BFS and BFS zigzag visitation orders
//! - Connected-component partitioning
//! - Kruskal minimum spanning forest and Dijkstra shortest distances
//! - Graph provider trait for pluggable data sources

pub mod adjacency;
pub mod algos;
pub mod traversal;
pub mod types;

pub use adjacency::{Adjacency, Graph};
pub use algos::{
    bfs, bfs_zigzag, dfs, dijkstra, kruskal, partitions, DisjointSet, Distance, ShortestPaths,
};
pub use traversal::GraphProvider;
pub use types::{Cost, Edge, GraphKind, Node};
