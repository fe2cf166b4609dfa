/// Field values read as missing in addition to the empty field.
///
/// These are the markers spreadsheet and dataframe exports commonly write
/// for "no value".
pub const DEFAULT_NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options for [`read_csv_table`](super::read_csv_table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    /// Exact field values (besides the empty field) loaded as missing.
    pub na_tokens: Vec<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            na_tokens: DEFAULT_NA_TOKENS
                .iter()
                .map(|token| (*token).to_string())
                .collect(),
        }
    }
}

impl IngestOptions {
    /// Only the empty field counts as missing.
    #[must_use]
    pub fn empty_only() -> Self {
        Self {
            na_tokens: Vec::new(),
        }
    }

    pub(crate) fn is_missing(&self, field: &str) -> bool {
        field.is_empty() || self.na_tokens.iter().any(|token| token == field)
    }
}
