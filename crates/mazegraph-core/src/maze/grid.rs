use crate::graph::Graph;

/// Name of the cell at `row`, `col`, e.g. `r2c1`
pub fn cell_name(row: usize, col: usize) -> String {
    format!("r{row}c{col}")
}

/// Build a grid graph of `rows` x `cols` cells.
///
/// Every cell gets a unit-weight edge to the cell above, below, left and
/// right of it where such a cell exists. Each interior edge is only added
/// once (from its upper or left endpoint); the adjacency is the same as
/// adding it from both sides. Zero rows or columns give an empty graph.
#[tracing::instrument]
pub fn build_grid_graph(rows: usize, cols: usize) -> Graph {
    let mut graph = Graph::new();

    for r in 0..rows {
        for c in 0..cols {
            let current = cell_name(r, c);
            graph.get_or_create_node(&current);
            if r + 1 < rows {
                graph.add_undirected_edge(&current, &cell_name(r + 1, c), 1);
            }
            if c + 1 < cols {
                graph.add_undirected_edge(&current, &cell_name(r, c + 1), 1);
            }
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "grid graph built"
    );
    graph
}
