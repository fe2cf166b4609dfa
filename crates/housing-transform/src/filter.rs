use housing_model::Table;

/// Missing-cell count for one checked column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMissing {
    pub column: String,
    pub missing: usize,
}

/// Count missing cells per column. Names the table lacks are skipped.
pub fn missing_counts(table: &Table, columns: &[&str]) -> Vec<ColumnMissing> {
    columns
        .iter()
        .filter_map(|name| {
            let idx = table.column_index(name)?;
            Some(ColumnMissing {
                column: (*name).to_string(),
                missing: table.column_values(idx).filter(|v| v.is_missing()).count(),
            })
        })
        .collect()
}

/// Drop every row holding a missing value in any of `columns`.
///
/// Surviving rows keep their relative order and are renumbered from zero.
pub fn drop_missing(mut table: Table, columns: &[&str]) -> Table {
    let checked: Vec<usize> = columns
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();
    let before = table.height();
    table.retain_rows(|row| checked.iter().all(|&idx| !row[idx].is_missing()));
    tracing::debug!(
        kept = table.height(),
        dropped = before - table.height(),
        "dropped rows with missing values"
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use housing_model::Value;

    fn table() -> Table {
        Table::from_rows(
            vec!["A".into(), "B".into(), "Note".into()],
            vec![
                vec![Value::from(1.0), Value::from("x"), Value::Missing],
                vec![Value::Missing, Value::from("y"), Value::from("n")],
                vec![Value::from(3.0), Value::Missing, Value::from("n")],
                vec![Value::from(4.0), Value::from("z"), Value::from("n")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_drops_rows_with_missing_checked_cells() {
        let result = drop_missing(table(), &["A", "B"]);

        assert_eq!(result.height(), 2);
        assert_eq!(result.rows()[0][0], Value::from(1.0));
        assert_eq!(result.rows()[1][0], Value::from(4.0));
    }

    #[test]
    fn test_unchecked_columns_do_not_drop_rows() {
        let result = drop_missing(table(), &["Note"]);

        assert_eq!(result.height(), 3);
        assert_eq!(result.rows()[0][0], Value::Missing);
    }

    #[test]
    fn test_counts_missing_per_column() {
        let counts = missing_counts(&table(), &["A", "B", "Other"]);

        assert_eq!(
            counts,
            vec![
                ColumnMissing {
                    column: "A".into(),
                    missing: 1
                },
                ColumnMissing {
                    column: "B".into(),
                    missing: 1
                },
            ]
        );
    }
}
