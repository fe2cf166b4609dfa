//! Output error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing a table to disk.
#[derive(Debug, Error)]
pub enum OutputError {
    /// File I/O error.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to write CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// The temporary file could not be renamed over the destination.
    #[error("failed to move {temp_path} to {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
