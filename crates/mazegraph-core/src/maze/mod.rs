//! Grid graphs and maze extraction
//!
//! A grid graph places one node per cell of an R x C lattice with unit
//! edges between horizontal and vertical neighbours. Running a depth-first
//! traversal over it and keeping one edge per discovered cell yields a maze.

pub mod extract;
pub mod grid;

pub use extract::extract_maze;
pub use grid::{build_grid_graph, cell_name};
