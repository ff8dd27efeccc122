//! CLI commands for mazegraph

pub mod dispatch;
pub mod grid;
pub mod maze;
pub mod mst;
pub mod paths;
pub mod traverse;

use std::path::Path;

use mazegraph_core::error::Result;
use mazegraph_core::format::edge_list::parse_edge_list;
use mazegraph_core::format::read_input;
use mazegraph_core::graph::Graph;

/// Read and parse an edge-list graph file
pub fn load_graph(path: &Path) -> Result<Graph> {
    let text = read_input(path)?;
    let graph = parse_edge_list(&text)?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}
