use crate::error::Result;
use crate::graph::algos::shared::traverse_with;
use crate::graph::{Graph, Node};

/// Perform a depth-first traversal from `start`.
///
/// Same visiting rules as [`breadth_first_search`](super::breadth_first_search)
/// with a stack instead of a queue. Neighbours of a popped node are pushed in
/// name order, so the lexicographically greatest unvisited neighbour is
/// expanded next. The visit order is fully determined by node names.
#[tracing::instrument(skip(graph, visit), fields(start = %start, nodes = graph.node_count()))]
pub fn depth_first_search<'g, F>(graph: &'g Graph, start: &str, visit: F) -> Result<()>
where
    F: FnMut(&'g Node),
{
    let visited = traverse_with(graph, start, Vec::new(), visit)?;
    tracing::debug!(visited, "dfs complete");
    Ok(())
}
