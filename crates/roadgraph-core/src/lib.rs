//! Roadgraph Core Library
//!
//! Weighted graphs with traversal, component partitioning, minimum
//! spanning trees and shortest paths, plus the libraries-versus-roads
//! planner built on top of them.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
pub mod roads;
