use housing_model::Table;

use crate::error::{Result, TransformError};

/// Keep only `columns`, in that order.
///
/// Every name is resolved before any row is copied, so a missing column
/// fails the call without producing a partial table. When the source has
/// duplicate names the first occurrence is used.
pub fn select_columns(table: &Table, columns: &[&str]) -> Result<Table> {
    let indices = columns
        .iter()
        .map(|name| {
            table
                .column_index(name)
                .ok_or_else(|| TransformError::ColumnNotFound {
                    column: (*name).to_string(),
                    available: table.columns().to_vec(),
                })
        })
        .collect::<Result<Vec<usize>>>()?;

    let mut projected = Table::new(columns.iter().map(|name| (*name).to_string()).collect());
    for row in table.rows() {
        let values = indices.iter().map(|&idx| row[idx].clone()).collect();
        projected.push_row(values)?;
    }
    tracing::debug!(
        from = table.width(),
        to = projected.width(),
        rows = projected.height(),
        "selected columns"
    );
    Ok(projected)
}
