//! Command implementations for roadgraph

pub mod dispatch;
pub mod dump;
pub mod format;
pub mod mst;
pub mod partitions;
pub mod roads;
pub mod shortest;
pub mod traverse;
