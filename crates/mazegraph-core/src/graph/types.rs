use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::GraphError;

/// An undirected edge view with endpoints in canonical order (`a <= b`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Edge {
    pub a: String,
    pub b: String,
    pub weight: u32,
}

impl Edge {
    pub fn new(x: &str, y: &str, weight: u32) -> Self {
        let (a, b) = if x <= y { (x, y) } else { (y, x) };
        Self {
            a: a.to_string(),
            b: b.to_string(),
            weight,
        }
    }
}

/// Order in which a traversal expands discovered nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Breadth-first (FIFO)
    #[default]
    Bfs,
    /// Depth-first (LIFO)
    Dfs,
}

impl FromStr for TraversalOrder {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(TraversalOrder::Bfs),
            "dfs" | "depth-first" => Ok(TraversalOrder::Dfs),
            other => Err(GraphError::invalid_value("traversal order", other)),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::Bfs => write!(f, "bfs"),
            TraversalOrder::Dfs => write!(f, "dfs"),
        }
    }
}
