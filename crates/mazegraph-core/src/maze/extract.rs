use crate::error::Result;
use crate::graph::{Graph, Node};

/// Extract a maze from a grid graph by depth-first traversal from `start`.
///
/// The visitor keeps the cells seen so far in visit order, seeded with the
/// start cell. Each newly visited cell is joined (weight 1) to the most
/// recently seen cell it is adjacent to in `grid`. Every cell reachable from
/// `start` ends up in the result exactly once, joined by exactly one path.
#[tracing::instrument(skip(grid), fields(start = %start, cells = grid.node_count()))]
pub fn extract_maze(grid: &Graph, start: &str) -> Result<Graph> {
    let start_node = grid.require_node(start)?;
    let mut maze = Graph::new();
    maze.get_or_create_node(start_node.name());

    let mut history: Vec<&Node> = vec![start_node];
    grid.depth_first_search(start, |node| {
        if let Some(previous) = history.iter().rev().find(|seen| node.has_edge(seen.name())) {
            maze.add_undirected_edge(previous.name(), node.name(), 1);
        } else {
            maze.get_or_create_node(node.name());
        }
        history.push(node);
    })?;

    tracing::debug!(
        cells = maze.node_count(),
        passages = maze.edge_count(),
        "maze extracted"
    );
    Ok(maze)
}
