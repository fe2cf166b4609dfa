//! Error types for housing data ingestion.

use std::path::{Path, PathBuf};

use housing_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading CSV data.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited text. The whole load is rejected.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The file has no header line.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    #[error(transparent)]
    Table(#[from] ModelError),
}

impl IngestError {
    pub(crate) fn from_io(path: &Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }

    /// Map a `csv` error, keeping I/O failures distinct from parse failures.
    pub(crate) fn from_csv(path: &Path, error: ::csv::Error) -> Self {
        if error.is_io_error() {
            match error.into_kind() {
                ::csv::ErrorKind::Io(io) => Self::from_io(path, io),
                other => Self::CsvParse {
                    path: path.to_path_buf(),
                    message: format!("{other:?}"),
                },
            }
        } else {
            Self::CsvParse {
                path: path.to_path_buf(),
                message: error.to_string(),
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
