//! Data model for the subsidized housing cleaner.
//!
//! A [`Table`] is an ordered list of columns and an ordered list of rows of
//! tagged [`Value`]s. Missing data is an explicit [`Value::Missing`] variant
//! rather than a sentinel string or NaN, so "no value" never collides with
//! an empty string or zero.

mod columns;
mod error;
mod table;
mod value;

pub use columns::{
    ACTIVE_SUBS, LATITUDE, LONGITUDE, OWNER_TYPE, SELECTED_COLUMNS, TOTAL_UNITS,
};
pub use error::{ModelError, Result};
pub use table::{Row, Table};
pub use value::Value;
