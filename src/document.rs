//! Input document loading and path rules
//!
//! Everything that has to happen before the core sees a record list: path
//! validation on both sides, whole-file parsing (simd-json fast path with a
//! serde_json fallback) and selection of the record array from the document
//! root. All failure modes live here, reported as [`DocumentError`].

use crate::error::DocumentError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Human-readable name of a JSON value's shape, for error reporting
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case(expected))
}

/// Validate that the input document exists and is named like a JSON file
pub fn check_input_path(path: &Path) -> Result<(), DocumentError> {
    if !path.exists() {
        return Err(DocumentError::InputMissing {
            path: path.to_path_buf(),
        });
    }
    if !has_extension(path, "json") {
        return Err(DocumentError::NotJson {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Resolve the output path
///
/// An explicit path must be named like a CSV file; an omitted one defaults to
/// the input path with its extension swapped to `.csv`.
pub fn resolve_output_path(
    input: &Path,
    output: Option<PathBuf>,
) -> Result<PathBuf, DocumentError> {
    match output {
        Some(path) if has_extension(&path, "csv") => Ok(path),
        Some(path) => Err(DocumentError::NotCsv { path }),
        None => Ok(input.with_extension("csv")),
    }
}

/// Read and parse the whole input document
///
/// Tries simd-json first; when it refuses the input, serde_json decides and
/// its message is what a malformed document reports.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // simd-json parses in place; keep the original bytes for the fallback
    let mut simd_bytes = bytes.clone();
    match simd_json::serde::from_slice::<Value>(&mut simd_bytes) {
        Ok(document) => Ok(document),
        Err(_) => serde_json::from_slice(&bytes).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Pull the record array out of the document root
///
/// The root must be an object holding `key`, and the value under `key` must
/// be an array. Sibling fields (session metadata and the like) are discarded.
/// Elements may be any JSON value; the flattener is total over them.
pub fn select_records(document: Value, key: &str) -> Result<Vec<Value>, DocumentError> {
    let mut root = match document {
        Value::Object(root) => root,
        other => {
            return Err(DocumentError::RootNotObject {
                found: value_kind(&other),
            })
        }
    };

    let records = root
        .remove(key)
        .ok_or_else(|| DocumentError::MissingRecordsKey {
            key: key.to_string(),
        })?;

    match records {
        Value::Array(items) => {
            debug!(records = items.len(), "selected record array");
            Ok(items)
        }
        other => Err(DocumentError::RecordsNotArray {
            key: key.to_string(),
            found: value_kind(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_must_exist() {
        let error = check_input_path(Path::new("/nowhere/missing.json")).unwrap_err();
        assert!(matches!(error, DocumentError::InputMissing { .. }));
    }

    #[test]
    fn input_must_be_named_like_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.txt");
        fs::write(&path, "{}").unwrap();

        let error = check_input_path(&path).unwrap_err();
        assert!(matches!(error, DocumentError::NotJson { .. }));
    }

    #[test]
    fn json_extension_check_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.JSON");
        fs::write(&path, "{}").unwrap();

        assert!(check_input_path(&path).is_ok());
    }

    #[test]
    fn explicit_output_must_be_named_like_csv() {
        let error =
            resolve_output_path(Path::new("capture.json"), Some(PathBuf::from("out.tsv")))
                .unwrap_err();
        assert!(matches!(error, DocumentError::NotCsv { .. }));

        let path =
            resolve_output_path(Path::new("capture.json"), Some(PathBuf::from("out.csv")))
                .unwrap();
        assert_eq!(path, PathBuf::from("out.csv"));
    }

    #[test]
    fn omitted_output_swaps_the_extension() {
        let path = resolve_output_path(Path::new("/data/capture.json"), None).unwrap();
        assert_eq!(path, PathBuf::from("/data/capture.csv"));
    }

    #[test]
    fn malformed_documents_report_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"frame\": [").unwrap();

        let error = load_document(&path).unwrap_err();
        assert!(matches!(error, DocumentError::Parse { .. }));
    }

    #[test]
    fn documents_parse_and_keep_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.json");
        fs::write(&path, "{\"frame\": [{\"z\": 1, \"a\": 2}]}").unwrap();

        let document = load_document(&path).unwrap();
        let records = select_records(document, "frame").unwrap();
        let keys: Vec<&String> = records[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn root_must_be_an_object() {
        let error = select_records(json!([1, 2]), "frame").unwrap_err();
        match error {
            DocumentError::RootNotObject { found } => assert_eq!(found, "array"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_records_key_is_reported() {
        let error = select_records(json!({"session": {}}), "frame").unwrap_err();
        match error {
            DocumentError::MissingRecordsKey { key } => assert_eq!(key, "frame"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn records_key_must_hold_an_array() {
        let error = select_records(json!({"frame": 4}), "frame").unwrap_err();
        match error {
            DocumentError::RecordsNotArray { key, found } => {
                assert_eq!(key, "frame");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sibling_fields_are_discarded() {
        let records =
            select_records(json!({"session": {"id": "s"}, "frame": [{"id": 1}]}), "frame")
                .unwrap();
        assert_eq!(records, vec![json!({"id": 1})]);
    }
}
