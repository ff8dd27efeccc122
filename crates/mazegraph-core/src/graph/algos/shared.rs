use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::{Graph, Node};

/// Pending nodes of a traversal; the discipline decides BFS vs DFS
pub trait Frontier<'g> {
    fn put(&mut self, node: &'g Node);
    fn take(&mut self) -> Option<&'g Node>;
}

/// FIFO frontier
impl<'g> Frontier<'g> for VecDeque<&'g Node> {
    fn put(&mut self, node: &'g Node) {
        self.push_back(node);
    }

    fn take(&mut self) -> Option<&'g Node> {
        self.pop_front()
    }
}

/// LIFO frontier
impl<'g> Frontier<'g> for Vec<&'g Node> {
    fn put(&mut self, node: &'g Node) {
        self.push(node);
    }

    fn take(&mut self) -> Option<&'g Node> {
        self.pop()
    }
}

/// Drive a traversal from `start` over `frontier`.
///
/// A node is marked visited and handed to `visit` when it is first put on
/// the frontier, never when it is taken. Membership is always checked
/// against the visited set, so a node taken earlier is never re-added.
/// Returns the number of nodes passed to `visit`.
pub fn traverse_with<'g, Q, F>(
    graph: &'g Graph,
    start: &str,
    mut frontier: Q,
    mut visit: F,
) -> Result<usize>
where
    Q: Frontier<'g>,
    F: FnMut(&'g Node),
{
    let root = graph.require_node(start)?;
    let mut visited: HashSet<&'g str> = HashSet::new();
    visited.insert(root.name());
    frontier.put(root);

    while let Some(current) = frontier.take() {
        for neighbor_name in current.neighbors() {
            if visited.contains(neighbor_name) {
                continue;
            }
            let neighbor = graph.require_node(neighbor_name)?;
            visited.insert(neighbor.name());
            frontier.put(neighbor);
            visit(neighbor);
        }
    }

    Ok(visited.len() - 1)
}
