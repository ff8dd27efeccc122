//! Grid command
use mazegraph_core::config::MazeConfig;
use mazegraph_core::error::Result;
use mazegraph_core::format::json::GraphExport;
use mazegraph_core::format::{dot, write_output, OutputFormat};
use mazegraph_core::maze::build_grid_graph;

use crate::cli::{Cli, GridArgs};

/// Execute the grid command
///
/// With no `--output`, the DOT goes to the config's `grid_output` when a
/// config file was loaded, and to stdout otherwise.
pub fn execute(cli: &Cli, mut config: MazeConfig, from_file: bool, args: &GridArgs) -> Result<()> {
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    config.validate()?;

    let graph = build_grid_graph(config.rows, config.cols);

    let output = args
        .output
        .clone()
        .or_else(|| from_file.then(|| config.grid_output.clone()));

    match &output {
        Some(path) => {
            let text = dot::render_grid(&graph, config.rows, config.cols, &config.grid_name);
            write_output(path, &text)?;
            match cli.format {
                OutputFormat::Json => {
                    let summary = serde_json::json!({
                        "rows": config.rows,
                        "cols": config.cols,
                        "nodes": graph.node_count(),
                        "edges": graph.edge_count(),
                        "output": path.display().to_string(),
                    });
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                OutputFormat::Human => {
                    if !cli.quiet {
                        println!(
                            "Wrote {}x{} grid ({} nodes, {} edges) to {}",
                            config.rows,
                            config.cols,
                            graph.node_count(),
                            graph.edge_count(),
                            path.display()
                        );
                    }
                }
            }
        }
        None => match cli.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&GraphExport::from(&graph))?
                );
            }
            OutputFormat::Human => {
                println!(
                    "{}",
                    dot::render_grid(&graph, config.rows, config.cols, &config.grid_name)
                );
            }
        },
    }

    Ok(())
}
