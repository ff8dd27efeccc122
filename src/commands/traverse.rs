//! Traverse command
use std::path::Path;

use mazegraph_core::error::Result;
use mazegraph_core::format::json::TraversalExport;
use mazegraph_core::format::OutputFormat;
use mazegraph_core::graph::TraversalOrder;

use crate::cli::Cli;
use crate::commands::load_graph;

/// Execute the traverse command
pub fn execute(cli: &Cli, file: &Path, start: &str, order: TraversalOrder) -> Result<()> {
    let graph = load_graph(file)?;

    let mut visited = Vec::new();
    graph.traverse(start, order, |node| visited.push(node.name().to_string()))?;

    match cli.format {
        OutputFormat::Json => {
            let export = TraversalExport {
                start: start.to_string(),
                order,
                visited,
            };
            println!("{}", serde_json::to_string_pretty(&export)?);
        }
        OutputFormat::Human => {
            for name in &visited {
                println!("{}", name);
            }
            if !cli.quiet {
                eprintln!(
                    "{} visited {} node(s) from {}",
                    order,
                    visited.len(),
                    start
                );
            }
        }
    }

    Ok(())
}
