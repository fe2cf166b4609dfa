//! Fixed input/output locations and the column set.

use std::path::{Path, PathBuf};

use housing_ingest::IngestOptions;
use housing_model::SELECTED_COLUMNS;

/// Raw export of the dataset, as downloaded.
pub const RAW_CSV_NAME: &str = "Subsidized_Housing_-_Six_Metro_Areas_-_2017.csv";

/// Cleaned output, overwritten on every run.
pub const CLEAN_CSV_NAME: &str = "cleaned_subsidized_housing.csv";

/// `data/` next to this program's sources.
pub fn default_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Everything one clean run needs.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub columns: Vec<String>,
    pub ingest: IngestOptions,
}

impl CleanConfig {
    /// Raw and cleaned files inside `data_dir`, selecting the five housing
    /// columns.
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self {
            input: data_dir.join(RAW_CSV_NAME),
            output: data_dir.join(CLEAN_CSV_NAME),
            columns: SELECTED_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            ingest: IngestOptions::default(),
        }
    }

    #[must_use]
    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self::from_data_dir(&default_data_dir())
    }
}
