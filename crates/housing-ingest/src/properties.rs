//! Typed records read back from a cleaned housing file.

use std::path::Path;

use ::csv::ReaderBuilder;
use serde::Deserialize;

use crate::error::{IngestError, Result};

/// One cleaned housing entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HousingProperty {
    #[serde(rename = "TotalUnits")]
    pub total_units: u32,

    #[serde(rename = "ActiveSubs")]
    pub active_subs: u32,

    #[serde(rename = "Latitude")]
    pub latitude: f64,

    #[serde(rename = "Longitude")]
    pub longitude: f64,

    #[serde(rename = "OwnerType")]
    pub owner_type: String,
}

/// Records from a cleaned file plus the number of rows that did not fit
/// [`HousingProperty`].
#[derive(Debug, Clone, Default)]
pub struct PropertyLoad {
    pub properties: Vec<HousingProperty>,
    pub skipped: usize,
}

/// Load a cleaned CSV into [`HousingProperty`] records.
///
/// Rows that fail to deserialize are logged at `warn` and skipped; only a
/// missing or unreadable file is an error. Extra columns are ignored.
pub fn read_cleaned_properties(path: &Path) -> Result<PropertyLoad> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut load = PropertyLoad::default();
    for (idx, result) in reader.deserialize::<HousingProperty>().enumerate() {
        match result {
            Ok(property) => load.properties.push(property),
            Err(error) if error.is_io_error() => {
                return Err(IngestError::from_csv(path, error));
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    record = idx + 1,
                    %error,
                    "skipping invalid row"
                );
                load.skipped += 1;
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        loaded = load.properties.len(),
        skipped = load.skipped,
        "loaded cleaned properties"
    );
    Ok(load)
}
