use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::algos::shared::traverse_with;
use crate::graph::{Graph, Node};

/// Perform a breadth-first traversal from `start`.
///
/// `visit` is called exactly once for every node reachable from `start`
/// (excluding `start`), at the moment the node is first enqueued. Neighbours
/// are examined in name order. Fails with
/// [`GraphError::NodeNotFound`](crate::error::GraphError::NodeNotFound) if
/// `start` is not a node of the graph.
#[tracing::instrument(skip(graph, visit), fields(start = %start, nodes = graph.node_count()))]
pub fn breadth_first_search<'g, F>(graph: &'g Graph, start: &str, visit: F) -> Result<()>
where
    F: FnMut(&'g Node),
{
    let visited = traverse_with(graph, start, VecDeque::new(), visit)?;
    tracing::debug!(visited, "bfs complete");
    Ok(())
}
