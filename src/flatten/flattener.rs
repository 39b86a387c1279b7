//! Record flattening
//!
//! Turns one arbitrarily nested JSON record into a single-level mapping from
//! key path to scalar. Total over any well-formed value, side-effect free,
//! so records can be flattened in parallel with no ordering dependency.

use crate::flatten::path::{KeyPath, Segment};
use crate::flatten::types::FlatRecord;
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::Value;

/// Flatten one record into a path -> scalar mapping
///
/// Rules:
/// - empty object or null: one entry at the current path, valued `""`
/// - empty array: one entry at the current path extended by index `0`,
///   valued `""` (so a record where the array has elements refines the same
///   column family instead of introducing an unrelated one)
/// - non-empty object: recurse per key, in the key order of the document
/// - non-empty array: recurse per element, extending the path by its index
/// - scalar: one entry at the current path
///
/// A record that is itself `{}`, `null` or `[]` yields a single entry at the
/// root (respectively first-slot) path.
pub fn flatten_value(value: &Value) -> FlatRecord {
    let mut record = FlatRecord::new();
    let mut path = Vec::new();
    flatten_into(value, &mut path, &mut record);
    record
}

fn flatten_into(value: &Value, path: &mut Vec<Segment>, out: &mut FlatRecord) {
    match value {
        Value::Null => out.insert(KeyPath::new(path.clone()), Value::String(String::new())),
        Value::Object(fields) if fields.is_empty() => {
            out.insert(KeyPath::new(path.clone()), Value::String(String::new()));
        }
        Value::Array(items) if items.is_empty() => {
            path.push(Segment::Index(0));
            out.insert(KeyPath::new(path.clone()), Value::String(String::new()));
            path.pop();
        }
        Value::Object(fields) => {
            for (key, field) in fields {
                path.push(Segment::Key(key.clone()));
                flatten_into(field, path, out);
                path.pop();
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push(Segment::Index(index));
                flatten_into(item, path, out);
                path.pop();
            }
        }
        scalar => out.insert(KeyPath::new(path.clone()), scalar.clone()),
    }
}

/// Number of flattening workers: every available processing unit but one,
/// minimum one
fn worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .saturating_sub(1)
        .max(1)
}

/// Flatten a batch of records on a bounded worker pool
///
/// Each record is independent, so the work distributes freely across the
/// pool; results come back in input order.
pub fn flatten_records(records: &[Value]) -> Result<Vec<FlatRecord>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count())
        .build()
        .context("Failed to build the flattening worker pool")?;

    Ok(pool.install(|| records.par_iter().map(flatten_value).collect()))
}
