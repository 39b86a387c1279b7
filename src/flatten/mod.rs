//! Record flattening - turn nested JSON records into flat path -> scalar maps
//!
//! The flattener is the per-record half of the pipeline: each record is
//! flattened independently (and in parallel), producing the `FlatRecord`s the
//! schema reconciler then unifies into one column set.

pub mod flattener;
pub mod path;
pub mod types;

pub use flattener::{flatten_records, flatten_value};
pub use path::{KeyPath, Segment};
pub use types::{is_empty_cell, FlatRecord, TableConfig};
