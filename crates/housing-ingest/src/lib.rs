//! Loading of delimited housing data.
//!
//! # Features
//!
//! - **Table loading**: read any CSV into a [`housing_model::Table`], typing
//!   each column as numeric or text the way the raw export is laid out
//! - **Cleaned records**: read a cleaned file back as typed
//!   [`HousingProperty`] records
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use housing_ingest::{IngestOptions, read_csv_table};
//!
//! let table = read_csv_table(Path::new("data/raw.csv"), &IngestOptions::default())?;
//! println!("{} rows", table.height());
//! ```

mod csv;
mod error;
mod properties;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{DEFAULT_NA_TOKENS, IngestOptions, read_csv_table};

// === Typed Records ===
pub use properties::{HousingProperty, PropertyLoad, read_cleaned_properties};
