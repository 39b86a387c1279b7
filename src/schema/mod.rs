//! Column-set reconciliation
//!
//! This module decides the table schema: the ordered, deduplicated superset
//! of flattened key paths across all records, with spurious empty-array
//! placeholder columns filtered out.

pub mod reconciler;

pub use reconciler::reconcile;
