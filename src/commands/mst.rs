//! Minimum spanning tree command
use std::path::Path;

use mazegraph_core::error::Result;
use mazegraph_core::format::edge_list::render_edge_list;
use mazegraph_core::format::json::GraphExport;
use mazegraph_core::format::{dot, write_output, OutputFormat};

use crate::cli::Cli;
use crate::commands::load_graph;

/// Execute the mst command
pub fn execute(cli: &Cli, file: &Path, output: Option<&Path>) -> Result<()> {
    let graph = load_graph(file)?;
    let tree = graph.prim_jarnik()?;

    if let Some(path) = output {
        write_output(path, &dot::render_graph(&tree, "mst"))?;
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&GraphExport::from(&tree))?);
        }
        OutputFormat::Human => {
            print!("{}", render_edge_list(&tree));
            if !cli.quiet {
                println!("total weight: {}", tree.total_weight());
            }
        }
    }

    Ok(())
}
