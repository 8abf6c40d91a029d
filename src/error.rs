//! Error types for sql2tests.

use thiserror::Error;

/// Structural faults raised while extracting conditions from a statement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The statement or one of its clauses does not decompose into a supported node kind.
    #[error("Unsupported query shape: {0}")]
    UnsupportedQueryShape(String),
}

/// Faults raised while classifying conditions into scenarios.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A filter condition violates the value-count invariant of its operator.
    #[error(
        "Malformed condition on '{column}': operator {operator} expects {expected} value(s), found {found}"
    )]
    MalformedCondition {
        /// Column the condition applies to.
        column: String,
        /// SQL text of the operator.
        operator: String,
        /// Human-readable description of the accepted value count.
        expected: &'static str,
        /// Number of values actually present.
        found: usize,
    },
}

/// Faults raised by a text-completion backend.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The request could not be sent or the server answered with an error status.
    #[error("Completion request failed: {0}")]
    Http(String),

    /// The response body was not the expected JSON document.
    #[error("Completion response could not be decoded: {0}")]
    Decode(String),
}

/// Top-level error for the library and CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// SQL text rejected by the grammar parser.
    #[error("SQL parse error: {0}")]
    Parse(String),

    /// Dialect name not known to the grammar parser.
    #[error("Unknown SQL dialect: {0}")]
    UnknownDialect(String),

    /// See [`ExtractError`].
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// See [`GenerateError`].
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// See [`CompletionError`].
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Output file name failed validation.
    #[error("Invalid output name '{0}'")]
    InvalidOutputName(String),

    /// Filesystem failure while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure while rendering output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
