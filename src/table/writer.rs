//! CSV projection and writing
//!
//! Projects flattened records onto the reconciled column set: header first,
//! then one row per record in input order, with the empty string for any
//! column a record has no entry for. Quoting and escaping of delimiters,
//! quotes and newlines follow standard CSV rules via the `csv` crate.

use crate::error::TableError;
use crate::flatten::path::KeyPath;
use crate::flatten::types::{FlatRecord, TableConfig};
use serde_json::Value;
use std::io::Write;
use tracing::debug;

/// Render one cell as CSV text
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        // Containers never appear in flattened records; compact JSON as a last resort
        other => other.to_string(),
    }
}

/// Write header and rows for a batch of flattened records
///
/// A zero-record batch writes nothing at all: the output stays a valid,
/// empty table rather than a header with no columns.
pub fn write_table<W: Write>(
    out: W,
    columns: &[KeyPath],
    records: &[FlatRecord],
    config: &TableConfig,
) -> Result<(), TableError> {
    if records.is_empty() {
        debug!("no records to project; leaving the table empty");
        return Ok(());
    }

    let mut writer = csv::Writer::from_writer(out);

    let header: Vec<String> = columns
        .iter()
        .map(|column| column.join(&config.separator))
        .collect();
    writer.write_record(&header)?;

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| record.get(column).map(cell_text).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}
