//! Graphviz DOT rendering

use std::fmt::Write;

use crate::graph::Graph;
use crate::maze::cell_name;

/// Render a grid-shaped graph (a grid or a maze extracted from one).
///
/// Each row is pinned with a `rank=same` group so Graphviz lays the cells
/// out as a lattice, then every undirected edge is listed once.
pub fn render_grid(graph: &Graph, rows: usize, cols: usize, name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "graph {name} {{");

    for r in 0..rows {
        let rank: Vec<String> = (0..cols).map(|c| cell_name(r, c)).collect();
        let _ = writeln!(out, "{{ rank=same; {} }}", rank.join(", "));
    }

    for edge in graph.edges() {
        let _ = writeln!(out, "{} -- {};", edge.a, edge.b);
    }

    out.push('}');
    out
}

/// Render an arbitrary weighted graph, labelling edges with their weights
pub fn render_graph(graph: &Graph, name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "graph {name} {{");

    for node in graph.nodes() {
        let _ = writeln!(out, "  {};", quote(node.name()));
    }
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "  {} -- {} [label={}];",
            quote(&edge.a),
            quote(&edge.b),
            edge.weight
        );
    }

    out.push('}');
    out
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{build_grid_graph, extract_maze};

    #[test]
    fn test_render_grid_2x2() {
        let graph = build_grid_graph(2, 2);
        let dot = render_grid(&graph, 2, 2, "grid1");

        assert_eq!(
            dot,
            "graph grid1 {\n\
             { rank=same; r0c0, r0c1 }\n\
             { rank=same; r1c0, r1c1 }\n\
             r0c0 -- r0c1;\n\
             r0c0 -- r1c0;\n\
             r0c1 -- r1c1;\n\
             r1c0 -- r1c1;\n\
             }"
        );
    }

    #[test]
    fn test_render_maze_lists_each_passage_once() {
        let grid = build_grid_graph(4, 4);
        let maze = extract_maze(&grid, "r0c0").unwrap();
        let dot = render_grid(&maze, 4, 4, "maze1");

        assert!(dot.starts_with("graph maze1 {\n"));
        assert_eq!(dot.matches(" -- ").count(), 15);
        assert_eq!(dot.matches("rank=same").count(), 4);
    }

    #[test]
    fn test_render_graph_quotes_and_weights() {
        let mut graph = Graph::new();
        graph.add_undirected_edge("New York", "Boston", 215);
        graph.get_or_create_node("say \"hi\"");

        let dot = render_graph(&graph, "cities");
        assert!(dot.contains("  \"Boston\" -- \"New York\" [label=215];\n"));
        assert!(dot.contains("  \"say \\\"hi\\\"\";\n"));
        assert!(dot.ends_with('}'));
    }
}
