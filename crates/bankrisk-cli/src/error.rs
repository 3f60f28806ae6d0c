//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Returns given both inline and from a file.
    #[error("Use either --returns or --input, not both")]
    ConflictingReturns,

    /// No returns given.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Input file could not be read.
    #[error("Cannot read {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Input was not a valid request document.
    #[error("Invalid input in {path}: {message}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The service rejected the request.
    #[error("{code}: {message}")]
    Request {
        /// Error code from the response envelope.
        code: String,
        /// Error message from the response envelope.
        message: String,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
