use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use housing_cluster::ClusterReport;
use housing_transform::ColumnMissing;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Rows read from the input.
    pub input_rows: usize,
    /// Columns in the input file.
    pub input_columns: usize,
    /// Rows written.
    pub rows: usize,
    /// Columns written.
    pub columns: usize,
    /// Missing cells per selected column before incomplete rows were dropped.
    pub missing: Vec<ColumnMissing>,
    pub elapsed: Duration,
}

impl CleanResult {
    pub fn dropped_rows(&self) -> usize {
        self.input_rows - self.rows
    }
}

#[derive(Debug)]
pub struct InspectResult {
    pub path: PathBuf,
    pub loaded: usize,
    pub skipped: usize,
    /// Entry count per owner type.
    pub owner_types: BTreeMap<String, usize>,
}

#[derive(Debug)]
pub struct ClusterResult {
    pub path: PathBuf,
    pub loaded: usize,
    pub skipped: usize,
    pub report: ClusterReport,
}
