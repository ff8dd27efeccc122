//! Serializable views of graphs and algorithm results

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::{Edge, Graph, TraversalOrder};

/// A graph as node names plus canonical edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphExport {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
    pub total_weight: u64,
}

impl From<&Graph> for GraphExport {
    fn from(graph: &Graph) -> Self {
        Self {
            nodes: graph.nodes().map(|n| n.name().to_string()).collect(),
            edges: graph.edges(),
            total_weight: graph.total_weight(),
        }
    }
}

/// Dijkstra result keyed by node name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostsExport {
    pub start: String,
    pub costs: BTreeMap<String, u64>,
}

/// Nodes in the order a traversal first visited them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalExport {
    pub start: String,
    pub order: TraversalOrder,
    pub visited: Vec<String>,
}
