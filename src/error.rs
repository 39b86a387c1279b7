//! Error types for the conversion pipeline
//!
//! All errors surface at the boundary: argument and path validation, the
//! top-level read/parse/select step, and the final write. The flattening and
//! reconciliation core is a total computation with no error paths.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading, parsing or selecting from the input document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Input path does not exist.
    #[error("Input file does not exist: {}", .path.display())]
    InputMissing { path: PathBuf },

    /// Input path is not named like a JSON document.
    #[error("Input file must have a .json extension: {}", .path.display())]
    NotJson { path: PathBuf },

    /// Output path is not named like a CSV table.
    #[error("Output file must have a .csv extension: {}", .path.display())]
    NotCsv { path: PathBuf },

    /// Reading the document failed.
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not well-formed JSON.
    #[error("Failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document root is not an object.
    #[error("Document root must be an object, found {found}")]
    RootNotObject { found: &'static str },

    /// The root object has no records key.
    #[error("Document root has no \"{key}\" field")]
    MissingRecordsKey { key: String },

    /// The records key does not hold an array.
    #[error("Field \"{key}\" must hold an array of records, found {found}")]
    RecordsNotArray { key: String, found: &'static str },
}

/// Errors while writing the output table
#[derive(Debug, Error)]
pub enum TableError {
    /// CSV-level write failure.
    #[error("Failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
