//! CSV output for cleaned tables.
//!
//! Files are written to a temporary sibling and renamed into place, so a
//! failed run never leaves a half-written output behind.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{temp_path_for, write_csv_table};
