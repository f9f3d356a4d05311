//! JSON output for statjoin.

use std::fs;
use std::path::Path;

use statjoin_core::models::OutputDocument;
use statjoin_core::Result;

/// Serialize `document` as compact JSON and write it to `path`.
///
/// Writes to a sibling temp file and renames it into place, so a crash
/// mid-write never leaves a truncated document and a failed run leaves any
/// previous output untouched.
pub fn write_document(document: &OutputDocument, path: &Path) -> Result<()> {
    let json = serde_json::to_string(document)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &json)?;
    fs::rename(&tmp, path)?;

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use statjoin_core::models::StateRow;
    use tempfile::TempDir;

    fn sample_document() -> OutputDocument {
        let mut document = OutputDocument::new();
        document.insert(
            "eu".to_string(),
            vec![StateRow {
                state: "France".to_string(),
                values: vec![2900.0, 551695.0, 67000000.0, 0.903],
            }],
        );
        document
    }

    #[test]
    fn test_writes_compact_json() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("data.json");

        write_document(&sample_document(), &path).expect("write");

        let written = fs::read_to_string(&path).expect("read");
        assert_eq!(
            written,
            r#"{"eu":[["France",2900.0,551695.0,67000000.0,0.903]]}"#
        );
        assert!(!written.contains(' '), "compact output must have no padding");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("data.json");
        fs::write(&path, "old").unwrap();

        write_document(&sample_document(), &path).expect("write");
        let written = fs::read_to_string(&path).expect("read");
        assert!(written.starts_with('{'));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("data.json");

        write_document(&sample_document(), &path).expect("write");
        assert!(!tmp.path().join("data.json.tmp").exists());
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("out").join("data.json");

        write_document(&sample_document(), &path).expect("write");
        assert!(path.exists());
    }
}
