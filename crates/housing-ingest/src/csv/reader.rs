//! CSV file reading into a typed [`Table`].

use std::fs;
use std::path::Path;

use ::csv::ReaderBuilder;
use housing_model::{Table, Value};

use crate::error::{IngestError, Result};

use super::options::IngestOptions;

/// How the cells of one column are stored after loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Numeric,
    Text,
}

/// Parse a field as a number, tolerating surrounding whitespace.
fn parse_number(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| !number.is_nan())
}

/// A column is numeric when it has at least one value and every value
/// parses as a number. Anything else stays text, including a column whose
/// only non-numeric entries are whitespace.
fn infer_kind(raw_rows: &[Vec<Option<String>>], index: usize) -> ColumnKind {
    let mut seen = false;
    for row in raw_rows {
        let Some(field) = &row[index] else {
            continue;
        };
        if parse_number(field).is_none() {
            return ColumnKind::Text;
        }
        seen = true;
    }
    if seen {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    /// A quote seen inside a quoted field: either an escape or the close.
    QuoteInQuoted,
}

/// Line of the opening quote of a quoted field that is never closed.
///
/// The `csv` reader accepts such input and silently folds every later line
/// into the one field, so it has to be caught before parsing. Quotes are
/// only special at the start of a field; elsewhere they are literal.
fn unterminated_quote_line(bytes: &[u8]) -> Option<usize> {
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
    let mut state = QuoteState::FieldStart;
    let mut line = 1;
    let mut opened_on = 1;
    for &byte in bytes {
        state = match (state, byte) {
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (_, b',' | b'\n' | b'\r') => QuoteState::FieldStart,
            (QuoteState::FieldStart, b'"') => {
                opened_on = line;
                QuoteState::Quoted
            }
            _ => QuoteState::Unquoted,
        };
        if byte == b'\n' {
            line += 1;
        }
    }
    (state == QuoteState::Quoted).then_some(opened_on)
}

fn to_value(field: Option<String>, kind: ColumnKind) -> Value {
    match (field, kind) {
        (None, _) => Value::Missing,
        (Some(field), ColumnKind::Numeric) => {
            parse_number(&field).map_or(Value::Text(field), Value::Number)
        }
        (Some(field), ColumnKind::Text) => Value::Text(field),
    }
}

/// Reads a CSV file into a [`Table`].
///
/// The header line supplies the column names in order and each data line
/// becomes one row. Empty fields and configured NA tokens load as
/// [`Value::Missing`]; whitespace-only fields are kept as text. Numeric
/// columns are detected here, so a blank numeric field is already missing
/// once this returns.
///
/// A record whose field count differs from the header's, or a quoted field
/// left open at end of input, rejects the whole file.
pub fn read_csv_table(path: &Path, options: &IngestOptions) -> Result<Table> {
    let bytes = fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    if let Some(line) = unterminated_quote_line(&bytes) {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!("unterminated quoted field starting on line {line}"),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes.as_slice());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::from_csv(path, e))?
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if idx == 0 {
                name.trim_start_matches('\u{feff}').to_string()
            } else {
                name.to_string()
            }
        })
        .collect();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut raw_rows: Vec<Vec<Option<String>>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::from_csv(path, e))?;
        let row = record
            .iter()
            .map(|field| (!options.is_missing(field)).then(|| field.to_string()))
            .collect();
        raw_rows.push(row);
    }

    let kinds: Vec<ColumnKind> = (0..headers.len())
        .map(|idx| infer_kind(&raw_rows, idx))
        .collect();
    tracing::debug!(
        path = %path.display(),
        rows = raw_rows.len(),
        columns = headers.len(),
        numeric_columns = kinds.iter().filter(|kind| **kind == ColumnKind::Numeric).count(),
        "loaded csv"
    );

    let mut table = Table::new(headers);
    for raw in raw_rows {
        let row = raw
            .into_iter()
            .zip(&kinds)
            .map(|(field, kind)| to_value(field, *kind))
            .collect();
        table.push_row(row)?;
    }
    Ok(table)
}
