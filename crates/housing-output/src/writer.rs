use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use housing_model::{Table, Value};

use crate::error::{OutputError, Result};

/// Temporary file used while `path` is being written: `<name>.tmp` in the
/// same directory, so the final rename never crosses filesystems.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `table` as CSV: a header line with the column names, then one line
/// per row. Missing cells are empty fields; fields are quoted only when
/// they contain a delimiter, quote or line break.
///
/// The destination is created or overwritten atomically (temp file +
/// rename). Missing parent directories are created.
pub fn write_csv_table(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);
    if let Err(error) = write_rows(table, &temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        OutputError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        }
    })?;

    tracing::info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "wrote csv"
    );
    Ok(())
}

fn write_rows(table: &Table, path: &Path) -> Result<()> {
    let csv_error = |e: ::csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let file = File::create(path).map_err(|e| OutputError::Io {
        operation: "create",
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    writer.write_record(table.columns()).map_err(csv_error)?;
    for row in table.rows() {
        let fields: Vec<_> = row.iter().map(Value::render).collect();
        writer
            .write_record(fields.iter().map(|field| field.as_bytes()))
            .map_err(csv_error)?;
    }

    let file = writer.into_inner().map_err(|e| OutputError::Io {
        operation: "flush",
        path: path.to_path_buf(),
        source: e.into_error(),
    })?;
    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Table {
        Table::from_rows(
            vec!["TotalUnits".into(), "Latitude".into(), "OwnerType".into()],
            vec![
                vec![Value::from(12.0), Value::from(42.3601), Value::from("Private")],
                vec![Value::from(0.0), Value::Missing, Value::from("Smith, Inc")],
                vec![Value::from(3.0), Value::from(-1.5), Value::from("say \"hi\"")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_write_csv_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_csv_table(&sample(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        insta::assert_snapshot!(contents, @r#"
        TotalUnits,Latitude,OwnerType
        12,42.3601,Private
        0,,"Smith, Inc"
        3,-1.5,"say ""hi"""
        "#);
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_header_only_for_empty_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        let table = Table::new(vec!["A".into(), "B".into()]);

        write_csv_table(&table, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "A,B\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents that are longer than the new file\n").unwrap();

        let table = Table::from_rows(vec!["A".into()], vec![vec![Value::from("x")]]).unwrap();
        write_csv_table(&table, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "A\nx\n");
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("out.csv");

        write_csv_table(&sample(), &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_leaves_previous_output() {
        let dir = tempdir().unwrap();
        // A directory in the temp file's place makes the create fail.
        let path = dir.path().join("out.csv");
        fs::write(&path, "previous\n").unwrap();
        fs::create_dir(temp_path_for(&path)).unwrap();

        let result = write_csv_table(&sample(), &path);

        assert!(matches!(result, Err(OutputError::Io { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous\n");
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let path = Path::new("data").join("cleaned.csv");
        assert_eq!(temp_path_for(&path), Path::new("data").join("cleaned.csv.tmp"));
    }
}
