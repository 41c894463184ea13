//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dfs`: Explicit-stack depth-first search
//! - `bfs`: Breadth-first search and its zigzag variant
//! - `partition`: Connected components as induced subgraphs
//! - `kruskal`: Minimum spanning forest, backed by `union_find`
//! - `dijkstra`: Single-source shortest distances
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod partition;
pub mod shared;
pub mod union_find;

pub use bfs::{bfs, bfs_zigzag};
pub use dfs::dfs;
pub use dijkstra::{dijkstra, Distance, ShortestPaths};
pub use kruskal::kruskal;
pub use partition::partitions;
pub use union_find::DisjointSet;
