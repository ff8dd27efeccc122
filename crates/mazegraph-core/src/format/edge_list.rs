//! Line-oriented weighted edge list
//!
//! ```text
//! # comment
//! A B 3      edge A -- B with weight 3
//! B C        edge B -- C with weight 1
//! D          isolated node D
//! ```

use std::fmt::Write;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Parse an edge list into a graph.
///
/// Blank lines and lines starting with `#` are skipped. Repeated edges
/// overwrite earlier weights. Errors carry the 1-based line number.
pub fn parse_edge_list(text: &str) -> Result<Graph> {
    let mut graph = Graph::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [name] => {
                graph.get_or_create_node(name);
            }
            [a, b] => graph.add_undirected_edge(a, b, 1),
            [a, b, weight] => {
                let weight: u32 = weight.parse().map_err(|_| {
                    GraphError::parse(
                        line_no,
                        format!("weight must be a non-negative integer, got '{weight}'"),
                    )
                })?;
                graph.add_undirected_edge(a, b, weight);
            }
            _ => {
                return Err(GraphError::parse(
                    line_no,
                    format!("expected '<a> <b> [weight]', got {} fields", fields.len()),
                ))
            }
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed edge list"
    );
    Ok(graph)
}

/// Render a graph as an edge list that [`parse_edge_list`] reads back.
///
/// Isolated nodes are written on their own line so they survive a reload.
pub fn render_edge_list(graph: &Graph) -> String {
    let mut out = String::new();
    for node in graph.nodes().filter(|n| n.degree() == 0) {
        let _ = writeln!(out, "{}", node.name());
    }
    for edge in graph.edges() {
        let _ = writeln!(out, "{} {} {}", edge.a, edge.b, edge.weight);
    }
    out
}
