//! CSV table output

pub mod writer;

pub use writer::{cell_text, write_table};
