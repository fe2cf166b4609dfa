use housing_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// A requested column is absent from the source table.
    #[error("column '{column}' not found (available: {})", available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    Table(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
