use housing_model::{Table, Value};

/// Trim text cells in `columns`; text that is empty after trimming becomes
/// [`Value::Missing`].
///
/// Numbers and cells that are already missing are left alone, as are
/// columns the table does not have. Row and column counts never change.
pub fn normalize_text(mut table: Table, columns: &[&str]) -> Table {
    let targets: Vec<usize> = columns
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    let mut blanked = 0usize;
    for idx in targets {
        for cell in table.column_values_mut(idx) {
            let Value::Text(text) = &*cell else {
                continue;
            };
            let trimmed = text.trim();
            if trimmed.is_empty() {
                *cell = Value::Missing;
                blanked += 1;
            } else if trimmed.len() != text.len() {
                *cell = Value::Text(trimmed.to_string());
            }
        }
    }
    tracing::debug!(blanked, "normalized text cells");
    table
}
