//! Maze command
use std::time::Instant;

use mazegraph_core::config::MazeConfig;
use mazegraph_core::error::Result;
use mazegraph_core::format::json::GraphExport;
use mazegraph_core::format::{dot, write_output, OutputFormat};
use mazegraph_core::maze::{build_grid_graph, extract_maze};
use mazegraph_core::trace_time;

use crate::cli::{Cli, MazeArgs};

/// Apply command-line overrides on top of the loaded configuration
fn apply_overrides(config: &mut MazeConfig, args: &MazeArgs) {
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(start) = &args.start {
        config.start = start.clone();
    }
    if let Some(output) = &args.output {
        config.maze_output = output.clone();
    }
    if let Some(grid_output) = &args.grid_output {
        config.grid_output = grid_output.clone();
    }
}

/// Execute the maze command
pub fn execute(cli: &Cli, mut config: MazeConfig, args: &MazeArgs) -> Result<()> {
    let begin = Instant::now();
    apply_overrides(&mut config, args);
    config.validate()?;

    let grid = build_grid_graph(config.rows, config.cols);
    let maze = extract_maze(&grid, &config.start)?;
    trace_time!(begin, "build_maze", cells = maze.node_count());

    let maze_dot = dot::render_grid(&maze, config.rows, config.cols, &config.maze_name);

    if args.stdout {
        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&GraphExport::from(&maze))?);
            }
            OutputFormat::Human => println!("{}", maze_dot),
        }
        return Ok(());
    }

    let grid_dot = dot::render_grid(&grid, config.rows, config.cols, &config.grid_name);
    write_output(&config.grid_output, &grid_dot)?;
    write_output(&config.maze_output, &maze_dot)?;

    match cli.format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "rows": config.rows,
                "cols": config.cols,
                "start": config.start,
                "passages": maze.edge_count(),
                "grid_output": config.grid_output.display().to_string(),
                "maze_output": config.maze_output.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Wrote grid to {}", config.grid_output.display());
                println!(
                    "Wrote {}x{} maze from {} ({} passages) to {}",
                    config.rows,
                    config.cols,
                    config.start,
                    maze.edge_count(),
                    config.maze_output.display()
                );
            }
        }
    }

    Ok(())
}
