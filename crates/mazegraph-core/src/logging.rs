//! Diagnostic logging on stderr
//!
//! Stdout carries command output (DOT text, JSON documents), so every log
//! line goes to stderr and `mazegraph grid > grid.dot` stays clean.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a filter directive, checked before `RUST_LOG`
pub const LOG_ENV: &str = "MAZEGRAPH_LOG";

/// Crates a bare level such as `debug` applies to
const LOG_TARGETS: [&str; 2] = ["mazegraph", "mazegraph_core"];

/// Log the time elapsed since `$start` at trace level, with optional fields.
///
/// ```rust,ignore
/// let begin = Instant::now();
/// let maze = extract_maze(&grid, "r0c0")?;
/// trace_time!(begin, "build_maze", cells = maze.node_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Install the global subscriber.
///
/// Filter precedence: `--log-level`, then `MAZEGRAPH_LOG`, then `RUST_LOG`,
/// then `debug` under `--verbose` and `warn` otherwise.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = log_json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
    });
    let compact = (!log_json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(build_filter(verbose, log_level))
        .with(json)
        .with(compact)
        .try_init()?;

    Ok(())
}

fn build_filter(verbose: bool, log_level: Option<&str>) -> EnvFilter {
    if let Some(level) = log_level {
        return EnvFilter::new(directive_for(level));
    }

    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            let fallback = if verbose { "debug" } else { "warn" };
            EnvFilter::new(directive_for(fallback))
        })
}

/// Expand a bare level to every mazegraph target; full directives pass through
fn directive_for(level: &str) -> String {
    if level.contains('=') {
        return level.to_string();
    }
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
