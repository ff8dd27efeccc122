//! Graph algorithm implementations
//!
//! - `bfs`: Breadth-first traversal
//! - `dfs`: Depth-first traversal
//! - `dijkstra`: Single-source minimum path costs
//! - `prim`: Prim-Jarnik minimum spanning tree
//! - `shared`: Frontier-driven traversal used by BFS and DFS

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod prim;
pub mod shared;

pub use bfs::breadth_first_search;
pub use dfs::depth_first_search;
pub use dijkstra::dijkstra;
pub use prim::prim_jarnik;
