//! Output formats and serializers
//!
//! - `dot`: Graphviz rendering of grids, mazes and arbitrary graphs
//! - `edge_list`: Line-oriented weighted edge list (input and output)
//! - `json`: Serializable views for machine-readable output

pub mod dot;
pub mod edge_list;
pub mod json;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{GraphError, Result};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(GraphError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Write `text` to `path`, creating parent directories as needed
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| GraphError::io_operation("create directory", parent.display(), e))?;
    }
    fs::write(path, text).map_err(|e| GraphError::io_operation("write", path.display(), e))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}

/// Read a text input file
pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GraphError::io_operation("read", path.display(), e))
}
