//! CLI argument parsing for mazegraph
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mazegraph_core::format::OutputFormat;
use mazegraph_core::graph::TraversalOrder;

pub use args::{GridArgs, MazeArgs};
use parse::{parse_output_format, parse_traversal_order};

/// Mazegraph - weighted graph algorithms and grid maze generation
#[derive(Parser, Debug)]
#[command(name = "mazegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: ./mazegraph.toml when present)
    #[arg(long, global = true, env = "MAZEGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, mazegraph_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a grid graph and write it as Graphviz DOT
    Grid(GridArgs),

    /// Carve a maze out of a grid graph by depth-first traversal
    Maze(MazeArgs),

    /// List nodes in the order a BFS or DFS first visits them
    Traverse {
        /// Edge-list file describing the graph
        file: PathBuf,

        /// Node to start from
        #[arg(long, short)]
        start: String,

        /// Traversal order (bfs or dfs)
        #[arg(long, default_value = "bfs", value_parser = parse_traversal_order)]
        order: TraversalOrder,
    },

    /// Minimum path cost from a node to every other node (Dijkstra)
    Paths {
        /// Edge-list file describing the graph
        file: PathBuf,

        /// Node to start from
        #[arg(long, short)]
        start: String,
    },

    /// Minimum spanning tree (Prim-Jarnik)
    Mst {
        /// Edge-list file describing the graph
        file: PathBuf,

        /// Write the tree as Graphviz DOT to this path
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
