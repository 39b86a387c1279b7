//! Structured key paths
//!
//! Column names are rendered from paths, but all structural decisions
//! (deduplication, placeholder detection, prefix relationships) operate on
//! the segment sequence itself. A field literally named `"0"` and the first
//! slot of an array render identically yet remain distinguishable.

use serde::{Deserialize, Serialize};

/// One step in a key path: an object key or an array position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// An object key (object keys may be empty strings)
    Key(String),
    /// A zero-based array index
    Index(usize),
}

impl Segment {
    /// Render this segment as it appears in a column name
    pub fn render(&self) -> String {
        match self {
            Segment::Key(key) => key.clone(),
            Segment::Index(index) => index.to_string(),
        }
    }
}

/// A key path from the record root down to a leaf value or empty container
///
/// Paths compare and hash on their segments, not on the rendered column
/// name, so structurally different paths stay distinct even when their
/// rendered names collide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPath(Vec<Segment>);

impl KeyPath {
    /// The zero-segment path of a record that is itself a leaf
    pub fn root() -> Self {
        KeyPath(Vec::new())
    }

    pub fn new(segments: Vec<Segment>) -> Self {
        KeyPath(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Column name: segments joined by `separator`; the root path renders as `""`
    pub fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(Segment::render)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// True when the path addresses the first slot of an array
    ///
    /// This is the shape the flattener gives the placeholder entry for an
    /// empty array, so only such paths can be garbage columns.
    pub fn ends_with_index_zero(&self) -> bool {
        matches!(self.0.last(), Some(Segment::Index(0)))
    }

    /// True when `self` is a proper ancestor of `other`
    pub fn is_strict_prefix_of(&self, other: &KeyPath) -> bool {
        self.0.len() < other.0.len() && other.0[..self.0.len()] == self.0[..]
    }
}

impl From<Vec<Segment>> for KeyPath {
    fn from(segments: Vec<Segment>) -> Self {
        KeyPath(segments)
    }
}
