//! CSV reading utilities.

mod options;
mod reader;

pub use options::{DEFAULT_NA_TOKENS, IngestOptions};
pub use reader::read_csv_table;
