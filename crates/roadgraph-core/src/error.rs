//! Error types and exit codes for roadgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (duplicate or missing node, unreadable graph document)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes used by the roadgraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - graph contents rejected the operation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying graphs
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{operation} is not supported: {reason}")]
    Unsupported { operation: String, reason: String },

    // Data errors (exit code 3)
    #[error("node {label} is already in the graph")]
    DuplicateNode { label: String },

    #[error("node {label} not in graph")]
    MissingNode { label: String },

    #[error("invalid graph document {path:?}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GraphError {
    /// Create an error for a node that is already present
    pub fn duplicate_node(label: impl std::fmt::Display) -> Self {
        GraphError::DuplicateNode {
            label: label.to_string(),
        }
    }

    /// Create an error for a node that is absent from the graph
    pub fn missing_node(label: impl std::fmt::Display) -> Self {
        GraphError::MissingNode {
            label: label.to_string(),
        }
    }

    /// Create an error for an operation the graph kind cannot serve
    pub fn unsupported(operation: &str, reason: impl std::fmt::Display) -> Self {
        GraphError::Unsupported {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph document that could not be used
    pub fn invalid_document(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. }
            | GraphError::Unsupported { .. } => ExitCode::Usage,

            GraphError::DuplicateNode { .. }
            | GraphError::MissingNode { .. }
            | GraphError::InvalidDocument { .. } => ExitCode::Data,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Toml(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Unsupported { .. } => "unsupported",
            GraphError::DuplicateNode { .. } => "duplicate_node",
            GraphError::MissingNode { .. } => "missing_node",
            GraphError::InvalidDocument { .. } => "invalid_document",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for roadgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
