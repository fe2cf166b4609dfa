//! Table transformations applied between loading and writing.
//!
//! Each stage takes a [`Table`](housing_model::Table) and returns a new one:
//!
//! 1. [`select_columns`] keeps the requested columns in the requested order
//! 2. [`normalize_text`] trims text cells and turns blank ones into missing
//! 3. [`drop_missing`] removes every row with a missing cell in the checked
//!    columns
//!
//! [`clean_table`] runs all three.

mod clean;
mod error;
mod filter;
mod normalize;
mod project;

pub use clean::{CleanedTable, clean_table};
pub use error::{Result, TransformError};
pub use filter::{ColumnMissing, drop_missing, missing_counts};
pub use normalize::normalize_text;
pub use project::select_columns;
