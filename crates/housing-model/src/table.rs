use crate::error::{ModelError, Result};
use crate::value::Value;

/// One record. Identified only by its position in the table.
pub type Row = Vec<Value>;

/// Ordered columns and rows; every row holds exactly one value per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from rows, checking each row's width.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        let mut table = Self::new(columns);
        table.rows.reserve(rows.len());
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ModelError::RowWidth {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Position of the first column with this exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Mutable cells of one column, top to bottom.
    pub fn column_values_mut(&mut self, index: usize) -> impl Iterator<Item = &mut Value> + '_ {
        self.rows.iter_mut().map(move |row| &mut row[index])
    }

    /// Keep the rows for which `keep` returns true, preserving their order.
    pub fn retain_rows(&mut self, keep: impl FnMut(&Row) -> bool) {
        self.rows.retain(keep);
    }
}
