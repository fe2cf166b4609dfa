//! Properties of the full clean pass over arbitrary tables.

use housing_model::{SELECTED_COLUMNS, Table, Value};
use housing_transform::{TransformError, clean_table};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Missing),
        Just(Value::from("")),
        Just(Value::from("   ")),
        Just(Value::from("0")),
        Just(Value::from(0.0)),
        "[ ]{0,2}[A-Za-z-]{1,8}[ ]{0,2}".prop_map(Value::from),
        (-180.0f64..180.0).prop_map(Value::from),
    ]
}

/// Source columns: the five selected ones shuffled among two extras.
fn source_columns() -> Vec<String> {
    [
        "Extra1",
        SELECTED_COLUMNS[4],
        SELECTED_COLUMNS[2],
        "Extra2",
        SELECTED_COLUMNS[0],
        SELECTED_COLUMNS[3],
        SELECTED_COLUMNS[1],
    ]
    .iter()
    .map(|name| (*name).to_string())
    .collect()
}

fn source_table() -> impl Strategy<Value = Table> {
    prop::collection::vec(prop::collection::vec(cell(), 7), 0..40)
        .prop_map(|rows| Table::from_rows(source_columns(), rows).unwrap())
}

proptest! {
    #[test]
    fn test_output_has_selected_columns_in_order(table in source_table()) {
        let cleaned = clean_table(&table, &SELECTED_COLUMNS).unwrap();
        prop_assert_eq!(cleaned.table.columns(), SELECTED_COLUMNS);
    }

    #[test]
    fn test_output_has_no_missing_or_blank_cells(table in source_table()) {
        let cleaned = clean_table(&table, &SELECTED_COLUMNS).unwrap();
        for row in cleaned.table.rows() {
            for value in row {
                prop_assert!(!value.is_missing());
                if let Some(text) = value.as_text() {
                    prop_assert!(!text.trim().is_empty());
                    prop_assert_eq!(text, text.trim());
                }
            }
        }
    }

    #[test]
    fn test_filter_never_adds_rows(table in source_table()) {
        let cleaned = clean_table(&table, &SELECTED_COLUMNS).unwrap();
        prop_assert_eq!(cleaned.input_rows, table.height());
        prop_assert!(cleaned.table.height() <= cleaned.input_rows);
        prop_assert_eq!(cleaned.dropped_rows(), cleaned.input_rows - cleaned.table.height());
    }

    #[test]
    fn test_clean_is_deterministic(table in source_table()) {
        let first = clean_table(&table, &SELECTED_COLUMNS).unwrap();
        let second = clean_table(&table, &SELECTED_COLUMNS).unwrap();
        prop_assert_eq!(first.table, second.table);
    }
}

#[test]
fn test_whitespace_and_empty_drop_rows_alike() {
    let columns: Vec<String> = SELECTED_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    let table = Table::from_rows(
        columns,
        vec![
            vec![
                Value::from(10.0),
                Value::from(2.0),
                Value::from(42.36),
                Value::from(-71.05),
                Value::from("  "),
            ],
            vec![
                Value::from(20.0),
                Value::from(5.0),
                Value::from(41.88),
                Value::from(-87.63),
                Value::from("Private"),
            ],
            vec![
                Value::from(30.0),
                Value::from(1.0),
                Value::Missing,
                Value::from(-80.1),
                Value::from("Public"),
            ],
        ],
    )
    .unwrap();

    let cleaned = clean_table(&table, &SELECTED_COLUMNS).unwrap();

    assert_eq!(cleaned.table.height(), 1);
    assert_eq!(cleaned.table.rows()[0][4], Value::from("Private"));
    assert_eq!(cleaned.dropped_rows(), 2);
    let owner = cleaned
        .missing
        .iter()
        .find(|m| m.column == "OwnerType")
        .unwrap();
    assert_eq!(owner.missing, 1);
}

#[test]
fn test_zero_values_are_kept() {
    let columns: Vec<String> = SELECTED_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    let table = Table::from_rows(
        columns,
        vec![vec![
            Value::from(0.0),
            Value::from("0"),
            Value::from(0.0),
            Value::from(0.0),
            Value::from("0"),
        ]],
    )
    .unwrap();

    let cleaned = clean_table(&table, &SELECTED_COLUMNS).unwrap();

    assert_eq!(cleaned.table.height(), 1);
}

#[test]
fn test_missing_selected_column_fails() {
    let table = Table::new(vec!["TotalUnits".into(), "Latitude".into()]);

    let err = clean_table(&table, &SELECTED_COLUMNS).unwrap_err();

    assert!(matches!(
        err,
        TransformError::ColumnNotFound { ref column, .. } if column == "ActiveSubs"
    ));
}
