use housing_model::Table;

use crate::error::Result;
use crate::filter::{ColumnMissing, drop_missing, missing_counts};
use crate::normalize::normalize_text;
use crate::project::select_columns;

/// Output of [`clean_table`].
#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub table: Table,
    /// Rows after projection, before filtering.
    pub input_rows: usize,
    /// Missing cells per selected column after normalization.
    pub missing: Vec<ColumnMissing>,
}

impl CleanedTable {
    pub fn dropped_rows(&self) -> usize {
        self.input_rows - self.table.height()
    }
}

/// Project onto `columns`, blank out whitespace-only text and drop
/// incomplete rows.
pub fn clean_table(table: &Table, columns: &[&str]) -> Result<CleanedTable> {
    let projected = select_columns(table, columns)?;
    let input_rows = projected.height();
    let normalized = normalize_text(projected, columns);
    let missing = missing_counts(&normalized, columns);
    let table = drop_missing(normalized, columns);
    Ok(CleanedTable {
        table,
        input_rows,
        missing,
    })
}
