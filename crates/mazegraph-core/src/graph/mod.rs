//! Weighted undirected graph and its algorithms
//!
//! Provides the graph container and the algorithms dispatched over it:
//! - BFS and DFS traversal with a first-visit callback
//! - Dijkstra single-source shortest path costs
//! - Prim-Jarnik minimum spanning tree

pub mod algos;
pub mod node;
pub mod types;

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
pub use node::Node;
pub use types::{Edge, TraversalOrder};

/// An undirected weighted graph owning its nodes by name.
///
/// Nodes are kept in a name-ordered map, so [`Graph::nodes`] always yields
/// them in lexicographic order. Every name appearing in an adjacency map is
/// itself a node of the graph, because edges are only added through
/// [`Graph::add_undirected_edge`], which creates missing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: BTreeMap<String, Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node with the given name, creating it if absent.
    ///
    /// Subsequent calls with the same name return the same node.
    pub fn get_or_create_node(&mut self, name: &str) -> &Node {
        self.nodes
            .entry(name.to_string())
            .or_insert_with(|| Node::new(name))
    }

    /// Membership test with no side effects
    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Look up a node without creating it
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Look up a node, failing with [`GraphError::NodeNotFound`] if absent
    pub fn require_node(&self, name: &str) -> Result<&Node> {
        self.nodes
            .get(name)
            .ok_or_else(|| GraphError::node_not_found(name))
    }

    /// All nodes in lexicographic name order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add an undirected edge between `a` and `b`, creating either endpoint
    /// if needed. Both adjacency entries carry `weight`; adding the same pair
    /// again overwrites the previous weight.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: u32) {
        self.nodes
            .entry(a.to_string())
            .or_insert_with(|| Node::new(a))
            .set_weight(b, weight);
        self.nodes
            .entry(b.to_string())
            .or_insert_with(|| Node::new(b))
            .set_weight(a, weight);
    }

    /// Every undirected edge once, in canonical order, sorted
    pub fn edges(&self) -> Vec<Edge> {
        self.nodes()
            .flat_map(|node| {
                node.weighted_neighbors()
                    .filter(move |(other, _)| node.name() <= *other)
                    .map(move |(other, weight)| Edge::new(node.name(), other, weight))
            })
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes()
            .map(|node| {
                node.neighbors()
                    .filter(|other| node.name() <= *other)
                    .count()
            })
            .sum()
    }

    /// Sum of the weights of all undirected edges
    pub fn total_weight(&self) -> u64 {
        self.edges().iter().map(|e| u64::from(e.weight)).sum()
    }

    /// Breadth-first traversal from `start`, calling `visit` once per newly
    /// discovered node. The start node itself is not passed to `visit`.
    pub fn breadth_first_search<'g, F>(&'g self, start: &str, visit: F) -> Result<()>
    where
        F: FnMut(&'g Node),
    {
        algos::breadth_first_search(self, start, visit)
    }

    /// Depth-first traversal from `start`, calling `visit` once per newly
    /// discovered node. The start node itself is not passed to `visit`.
    pub fn depth_first_search<'g, F>(&'g self, start: &str, visit: F) -> Result<()>
    where
        F: FnMut(&'g Node),
    {
        algos::depth_first_search(self, start, visit)
    }

    /// Dispatch to BFS or DFS
    pub fn traverse<'g, F>(&'g self, start: &str, order: TraversalOrder, visit: F) -> Result<()>
    where
        F: FnMut(&'g Node),
    {
        match order {
            TraversalOrder::Bfs => self.breadth_first_search(start, visit),
            TraversalOrder::Dfs => self.depth_first_search(start, visit),
        }
    }

    /// Minimum cost from `start` to every node of the graph
    pub fn dijkstra(&self, start: &str) -> Result<BTreeMap<String, u64>> {
        algos::dijkstra(self, start)
    }

    /// Minimum spanning tree as a new graph
    pub fn prim_jarnik(&self) -> Result<Graph> {
        algos::prim_jarnik(self)
    }
}
