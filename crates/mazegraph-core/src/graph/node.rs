//! Named vertex with a weighted adjacency relation

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};

/// A named node of an undirected weighted graph.
///
/// Nodes are only obtained through [`Graph`](crate::graph::Graph), which owns
/// them by name. Adjacency is keyed by neighbour name, so neighbours are
/// always yielded in lexicographic name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    adjacency: BTreeMap<String, u32>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adjacency: BTreeMap::new(),
        }
    }

    /// Name of this node, unique within its graph
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of adjacent nodes in lexicographic order
    pub fn neighbors(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// Adjacent node names paired with edge weights, in lexicographic order
    pub fn weighted_neighbors(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.adjacency.iter().map(|(name, w)| (name.as_str(), *w))
    }

    /// Weight of the edge to `other`.
    ///
    /// Fails with [`GraphError::NotAdjacent`] when there is no such edge.
    pub fn weight_to(&self, other: &str) -> Result<u32> {
        self.adjacency
            .get(other)
            .copied()
            .ok_or_else(|| GraphError::not_adjacent(&self.name, other))
    }

    pub fn has_edge(&self, other: &str) -> bool {
        self.adjacency.contains_key(other)
    }

    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Record one direction of an edge; last write wins
    pub(crate) fn set_weight(&mut self, other: &str, weight: u32) {
        self.adjacency.insert(other.to_string(), weight);
    }
}
