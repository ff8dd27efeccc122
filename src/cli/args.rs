use clap::Args;
use std::path::PathBuf;

/// Arguments for the grid command
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Number of rows (default from config: 5)
    #[arg(long, short)]
    pub rows: Option<usize>,

    /// Number of columns (default from config: 5)
    #[arg(long, short)]
    pub cols: Option<usize>,

    /// DOT output path (default: the config's grid_output when a config file
    /// is loaded, stdout otherwise)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Arguments for the maze command
#[derive(Args, Debug, Clone)]
pub struct MazeArgs {
    /// Number of rows (default from config: 5)
    #[arg(long, short)]
    pub rows: Option<usize>,

    /// Number of columns (default from config: 5)
    #[arg(long, short)]
    pub cols: Option<usize>,

    /// Cell to carve from (default from config: r0c0)
    #[arg(long, short)]
    pub start: Option<String>,

    /// Maze DOT output path (default from config: files/maze.dot)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Grid DOT output path (default from config: files/grid.dot)
    #[arg(long)]
    pub grid_output: Option<PathBuf>,

    /// Print the maze DOT to stdout instead of writing files
    #[arg(long, conflicts_with_all = ["output", "grid_output"])]
    pub stdout: bool,
}
