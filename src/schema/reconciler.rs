//! Column-set reconciliation
//!
//! Flattening each record in isolation can give "the same" field two
//! incompatible shapes: a record where an array is empty contributes a
//! placeholder column (`a_0 = ""`) while a record where it has elements
//! contributes refined columns (`a_0_b = value`). The reconciler unifies the
//! column superset across all records, preferring the refined shape whenever
//! any record demonstrates the array really holds structured data.

use crate::flatten::path::KeyPath;
use crate::flatten::types::FlatRecord;
use std::collections::HashSet;

/// Compute the ordered column set for a batch of flattened records
///
/// Columns appear in first-seen order across the record sequence. A column is
/// dropped only when all three hold:
/// - it has the empty-array placeholder shape (its last segment is index `0`),
/// - no record holds a non-empty value for it,
/// - some other column refines it (has it as a strict segment prefix).
///
/// Detection works on path segments, not rendered names, so a field literally
/// named to end in `0` can never be mistaken for a placeholder.
pub fn reconcile(records: &[FlatRecord]) -> Vec<KeyPath> {
    let mut columns: Vec<KeyPath> = Vec::new();
    let mut seen: HashSet<KeyPath> = HashSet::new();
    for record in records {
        for path in record.paths() {
            if seen.insert(path.clone()) {
                columns.push(path.clone());
            }
        }
    }

    // Only paths shaped like the first slot of an array can be garbage
    let mut candidates: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, path)| path.ends_with_index_zero())
        .map(|(index, _)| index)
        .collect();

    // A column that carries real data anywhere is never garbage
    for record in records {
        if candidates.is_empty() {
            break;
        }
        candidates.retain(|&index| !record.has_content(&columns[index]));
    }

    // Drop the placeholders some record refined into real structure
    let dropped: HashSet<usize> = candidates
        .into_iter()
        .filter(|&index| {
            columns
                .iter()
                .any(|other| columns[index].is_strict_prefix_of(other))
        })
        .collect();

    columns
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !dropped.contains(index))
        .map(|(_, path)| path)
        .collect()
}
