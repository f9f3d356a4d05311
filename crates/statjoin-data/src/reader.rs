//! CSV reading for statjoin.
//!
//! Input files are headerless, two fields per row: state name and numeric
//! value text. The CSV crate handles quoting and field splitting; this
//! module enforces the row shape and parses the value.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use statjoin_core::{JoinError, Result};

/// Read one metric file into `(state, value)` pairs, in file order.
///
/// Fails on a missing/unreadable file, on any row that does not have exactly
/// two fields, and on value text that does not parse as `f64`. There is no
/// row-level recovery; the first bad row aborts the read.
pub fn read_metric_file(path: &Path) -> Result<Vec<(String, f64)>> {
    let file = File::open(path).map_err(|e| JoinError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut rows: Vec<(String, f64)> = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| JoinError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        let line = index as u64 + 1;

        if record.len() != 2 {
            return Err(JoinError::RowShape {
                path: path.to_path_buf(),
                line,
                fields: record.len(),
            });
        }

        let state = record[0].to_string();
        let text = record[1].trim();
        let value: f64 = text.parse().map_err(|e| JoinError::ValueParse {
            path: path.to_path_buf(),
            state: state.clone(),
            text: text.to_string(),
            source: e,
        })?;

        rows.push((state, value));
    }

    Ok(rows)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).expect("create fixture");
        f.write_all(content.as_bytes()).expect("write fixture");
        path
    }

    #[test]
    fn test_reads_rows_in_file_order() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_file(&tmp, "gdp.csv", "France,2900\nGermany,4200\n");

        let rows = read_metric_file(&path).expect("read");
        assert_eq!(
            rows,
            vec![
                ("France".to_string(), 2900.0),
                ("Germany".to_string(), 4200.0)
            ]
        );
    }

    #[test]
    fn test_quoted_state_names() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_file(&tmp, "pop.csv", "\"Bosnia, Herzegovina\",3200000\n");

        let rows = read_metric_file(&path).expect("read");
        assert_eq!(rows[0].0, "Bosnia, Herzegovina");
        assert_eq!(rows[0].1, 3200000.0);
    }

    #[test]
    fn test_missing_file_is_file_read_error() {
        let tmp = TempDir::new().expect("tempdir");
        let err = read_metric_file(&tmp.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, JoinError::FileRead { .. }));
    }

    #[test]
    fn test_non_numeric_value_is_fatal() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_file(&tmp, "hdi.csv", "France,not-a-number\n");

        let err = read_metric_file(&path).unwrap_err();
        match err {
            JoinError::ValueParse { state, text, .. } => {
                assert_eq!(state, "France");
                assert_eq!(text, "not-a-number");
            }
            other => panic!("expected ValueParse, got {other}"),
        }
    }

    #[test]
    fn test_wrong_field_count_is_fatal() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_file(&tmp, "land.csv", "France,551695\nGermany,357022,extra\n");

        let err = read_metric_file(&path).unwrap_err();
        match err {
            JoinError::RowShape { line, fields, .. } => {
                assert_eq!(line, 2);
                assert_eq!(fields, 3);
            }
            other => panic!("expected RowShape, got {other}"),
        }
    }

    #[test]
    fn test_empty_file_yields_no_rows() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_file(&tmp, "gdp.csv", "");
        assert!(read_metric_file(&path).expect("read").is_empty());
    }
}
