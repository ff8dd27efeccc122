//! Command dispatch logic for mazegraph
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use mazegraph_core::config::MazeConfig;
use mazegraph_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        None => handle_no_command(),

        Some(Commands::Grid(args)) => {
            let (config, source) = resolve_config(cli)?;
            commands::grid::execute(cli, config, source.is_some(), args)
        }

        Some(Commands::Maze(args)) => {
            let (config, _) = resolve_config(cli)?;
            commands::maze::execute(cli, config, args)
        }

        Some(Commands::Traverse {
            file,
            start: from,
            order,
        }) => commands::traverse::execute(cli, file, from, *order),

        Some(Commands::Paths { file, start: from }) => commands::paths::execute(cli, file, from),

        Some(Commands::Mst { file, output }) => {
            commands::mst::execute(cli, file, output.as_deref())
        }
    };

    tracing::debug!(elapsed = ?start.elapsed(), ok = result.is_ok(), "command complete");
    result
}

fn resolve_config(cli: &Cli) -> Result<(MazeConfig, Option<PathBuf>)> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    MazeConfig::resolve(cli.config.as_deref(), &cwd)
}

fn handle_no_command() -> Result<()> {
    println!("mazegraph {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Weighted graph algorithms and grid maze generation.");
    println!();
    println!("Run `mazegraph --help` for usage information.");
    Ok(())
}
