//! Paths command
use std::path::Path;

use mazegraph_core::error::Result;
use mazegraph_core::format::json::CostsExport;
use mazegraph_core::format::OutputFormat;

use crate::cli::Cli;
use crate::commands::load_graph;

/// Execute the paths command
pub fn execute(cli: &Cli, file: &Path, start: &str) -> Result<()> {
    let graph = load_graph(file)?;
    let costs = graph.dijkstra(start)?;

    match cli.format {
        OutputFormat::Json => {
            let export = CostsExport {
                start: start.to_string(),
                costs,
            };
            println!("{}", serde_json::to_string_pretty(&export)?);
        }
        OutputFormat::Human => {
            for (name, cost) in &costs {
                println!("{}\t{}", name, cost);
            }
        }
    }

    Ok(())
}
