//! Mazegraph - weighted graph algorithms and grid maze generation
//!
//! Builds grid graphs, carves mazes out of them by depth-first traversal,
//! and runs BFS/DFS, Dijkstra and Prim-Jarnik over edge-list graphs.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::{ContextKind, ErrorKind};
use clap::Parser;

use cli::Cli;
use mazegraph_core::error::{ExitCode as GraphExitCode, GraphError};
use mazegraph_core::format::OutputFormat;
use mazegraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if argv_requests_json() => return report_parse_error_json(err),
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {e}");
    }
    tracing::debug!(command = ?cli.command, "arguments parsed");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {e}");
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Turn a clap failure into a JSON error envelope on stderr.
///
/// Help and version output still go through clap unchanged. A rejected
/// flag value keeps the flag and value so scripts can point at them.
fn report_parse_error_json(err: clap::Error) -> ExitCode {
    let graph_error = match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
            match (err.get(ContextKind::InvalidArg), err.get(ContextKind::InvalidValue)) {
                (Some(arg), Some(value)) => GraphError::invalid_value(&arg.to_string(), value),
                _ => GraphError::UsageError(err.to_string()),
            }
        }
        _ => GraphError::UsageError(err.to_string()),
    };

    eprintln!("{}", graph_error.to_json());
    ExitCode::from(graph_error.exit_code() as u8)
}

/// `--format` is global, so clap may fail before it is parsed; scan raw argv
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
