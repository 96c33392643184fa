//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a trace document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot read trace file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid trace format: {0}")]
    InvalidFormat(String),
}

/// Errors raised when a report's preconditions do not hold
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("`iteration` must be greater than 0 in layered mode (got {0})")]
    InvalidIterationCount(i64),

    #[error(
        "layered mode needs at least 3 iterations of '{operator}', \
         but {pairs} pairs over {iterations} iterations were recorded"
    )]
    InsufficientSamples {
        operator: String,
        pairs: usize,
        iterations: usize,
    },

    #[error(
        "'{operator}' has {pairs} recorded pairs, which is not divisible by {iterations} iterations"
    )]
    UnevenLayering {
        operator: String,
        pairs: usize,
        iterations: usize,
    },

    #[error("'{name}' is not in the operator list. You may want to select one of: {}", .known.join(", "))]
    UnknownOperator { name: String, known: Vec<String> },

    #[error("no operator has a matched begin/end pair; nothing to summarize")]
    EmptyAggregate,
}

/// Errors that can occur while rendering a report
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
