//! Mazegraph Core Library
//!
//! Weighted undirected graphs with BFS, DFS, Dijkstra and Prim-Jarnik,
//! plus grid graphs and depth-first maze extraction.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod maze;

pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, Node, TraversalOrder};
