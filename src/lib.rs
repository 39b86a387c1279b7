//! # Flatiron - Frame Metadata Tabulation
//!
//! A library and CLI for flattening JSON capture documents (a root object
//! holding a list of per-frame metadata records) into rectangular CSV tables
//! whose columns are the reconciled union of flattened key paths.
//!
//! ## Modules
//!
//! - **flatten**: turn one nested record into a flat key-path -> scalar map
//! - **schema**: reconcile per-record maps into one ordered column set
//! - **table**: project records onto the column set and write CSV
//! - **document**: input loading, record selection and path rules
//!
//! ## Quick Start
//!
//! ```rust
//! use flatiron::{write_csv, TableConfig};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let document = json!({
//!     "frame": [
//!         {"id": 1, "tags": []},
//!         {"id": 2, "tags": [{"name": "x"}]}
//!     ]
//! });
//!
//! let mut out = Vec::new();
//! write_csv(document, &mut out, &TableConfig::default())?;
//!
//! // The empty "tags" in frame 1 is superseded by the refined column
//! // frame 2 demonstrates, so the schema is id,tags_0_name
//! assert_eq!(String::from_utf8(out)?, "id,tags_0_name\n1,\n2,x\n");
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use serde_json::Value;
use std::io::Write;

pub mod document;
pub mod error;
pub mod flatten;
pub mod schema;
pub mod table;

// Re-export commonly used types for convenience
pub use error::{DocumentError, TableError};
pub use flatten::{flatten_records, flatten_value, FlatRecord, KeyPath, Segment, TableConfig};
pub use schema::reconcile;
pub use table::write_table;

/// Main entry point: flatten a capture document into a CSV table
///
/// Selects the record array under `config.records_key`, flattens every record
/// in parallel, reconciles the column set and writes the table to `out`.
pub fn write_csv<W: Write>(document: Value, out: W, config: &TableConfig) -> Result<()> {
    let records = document::select_records(document, &config.records_key)?;
    export_records(&records, out, config)
}

/// Flatten an already-selected record list into a CSV table
pub fn export_records<W: Write>(records: &[Value], out: W, config: &TableConfig) -> Result<()> {
    let flat = flatten::flatten_records(records)?;
    let columns = schema::reconcile(&flat);
    table::write_table(out, &columns, &flat, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn end_to_end_table() {
        let document = json!({
            "frame": [
                {"id": 1, "pose": {"yaw": 0.5}, "tags": []},
                {"id": 2, "pose": {"yaw": -0.5}, "tags": [{"name": "x"}]}
            ]
        });

        let mut out = Vec::new();
        write_csv(document, &mut out, &TableConfig::default()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id,pose_yaw,tags_0_name\n1,0.5,\n2,-0.5,x\n"
        );
    }

    #[test]
    fn zero_records_produce_empty_output() {
        let mut out = Vec::new();
        write_csv(json!({"frame": []}), &mut out, &TableConfig::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn missing_records_key_is_an_error() {
        let mut out = Vec::new();
        let error = write_csv(json!({"session": {}}), &mut out, &TableConfig::default());
        assert!(error.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn custom_records_key_selects_other_documents() {
        let config = TableConfig {
            records_key: String::from("samples"),
            ..TableConfig::default()
        };

        let mut out = Vec::new();
        write_csv(json!({"samples": [{"id": 7}]}), &mut out, &config).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "id\n7\n");
    }
}
