//! Error types and exit codes for mazegraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, serialization)
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (unknown node, unreachable nodes, disconnected graph, bad input)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the mazegraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - graph does not satisfy an algorithm's preconditions (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node not found: {name}")]
    NodeNotFound { name: String },

    #[error("no edge between {from} and {to}")]
    NotAdjacent { from: String, to: String },

    #[error("{} node(s) unreachable from {start}: {}", .unreachable.len(), .unreachable.join(", "))]
    Unreachable {
        start: String,
        unreachable: Vec<String>,
    },

    #[error("graph is not connected: spanning tree reached {reached} of {total} nodes")]
    Disconnected { reached: usize, total: usize },

    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("config file not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },
}

impl GraphError {
    /// Create an error for a name that is not a node of the graph
    pub fn node_not_found(name: impl Into<String>) -> Self {
        GraphError::NodeNotFound { name: name.into() }
    }

    /// Create an error for a weight query between non-adjacent nodes
    pub fn not_adjacent(from: impl Into<String>, to: impl Into<String>) -> Self {
        GraphError::NotAdjacent {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a parse error for a 1-based input line
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        GraphError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::NodeNotFound { .. }
            | GraphError::NotAdjacent { .. }
            | GraphError::Unreachable { .. }
            | GraphError::Disconnected { .. }
            | GraphError::Parse { .. }
            | GraphError::ConfigNotFound { .. } => ExitCode::Data,

            GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::FailedOperationWithTarget { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::NotAdjacent { .. } => "not_adjacent",
            GraphError::Unreachable { .. } => "unreachable",
            GraphError::Disconnected { .. } => "disconnected",
            GraphError::Parse { .. } => "parse_error",
            GraphError::ConfigNotFound { .. } => "config_not_found",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            GraphError::Unreachable { start, unreachable } => {
                error_obj["start"] = serde_json::json!(start);
                error_obj["unreachable"] = serde_json::json!(unreachable);
            }
            GraphError::Disconnected { reached, total } => {
                error_obj["reached"] = serde_json::json!(reached);
                error_obj["total"] = serde_json::json!(total);
            }
            GraphError::Parse { line, .. } => {
                error_obj["line"] = serde_json::json!(line);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
