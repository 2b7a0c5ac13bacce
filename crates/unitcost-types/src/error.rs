//! Error types for unitcost.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for unitcost operations.
pub type Result<T> = std::result::Result<T, UnitcostError>;

/// Errors that can occur while building or loading input parameters.
///
/// The cost model itself is total and never returns these.
#[derive(Error, Debug)]
pub enum UnitcostError {
    /// Parameter name not in the schema.
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// A `key=value` assignment without the `=`.
    #[error("Invalid assignment '{0}', expected KEY=VALUE")]
    InvalidAssignment(String),

    /// Failed to read a parameters file.
    #[error("Failed to read parameters file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
