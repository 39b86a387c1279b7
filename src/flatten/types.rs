use crate::flatten::path::KeyPath;
use serde_json::Value;

/// A record after flattening: an insertion-ordered mapping from key path to
/// scalar cell value
///
/// Scalars are stored as parsed; empty containers and nulls are stored as the
/// empty string. Non-empty containers contribute no entry of their own, only
/// their descendants do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatRecord {
    entries: Vec<(KeyPath, Value)>,
}

impl FlatRecord {
    pub fn new() -> Self {
        FlatRecord {
            entries: Vec::new(),
        }
    }

    /// Insert an entry, overwriting any existing entry at the same path
    pub(crate) fn insert(&mut self, path: KeyPath, value: Value) {
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == path) {
            slot.1 = value;
        } else {
            self.entries.push((path, value));
        }
    }

    pub fn get(&self, path: &KeyPath) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == path)
            .map(|(_, value)| value)
    }

    /// Paths in insertion order
    pub fn paths(&self) -> impl Iterator<Item = &KeyPath> {
        self.entries.iter().map(|(path, _)| path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyPath, &Value)> {
        self.entries.iter().map(|(path, value)| (path, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the record holds something other than the empty-cell marker
    /// at `path`
    pub fn has_content(&self, path: &KeyPath) -> bool {
        self.get(path).is_some_and(|value| !is_empty_cell(value))
    }
}

/// The marker stored for empty arrays, empty objects and nulls
pub fn is_empty_cell(value: &Value) -> bool {
    matches!(value, Value::String(text) if text.is_empty())
}

/// Configuration for turning a capture document into a table
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Root key holding the array of per-frame records
    pub records_key: String,

    /// Separator between path segments in column names
    pub separator: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            records_key: String::from("frame"),
            separator: String::from("_"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::path::Segment;
    use serde_json::json;

    fn path(name: &str) -> KeyPath {
        KeyPath::new(vec![Segment::Key(name.to_string())])
    }

    #[test]
    fn insert_overwrites_existing_paths() {
        let mut record = FlatRecord::new();
        record.insert(path("a"), json!(1));
        record.insert(path("b"), json!(2));
        record.insert(path("a"), json!(3));

        assert_eq!(record.len(), 2);
        assert_eq!(record.get(&path("a")), Some(&json!(3)));
        // Insertion order is kept across overwrites
        let order: Vec<String> = record.paths().map(|p| p.join("_")).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn content_check_excludes_empty_cells_and_absent_paths() {
        let mut record = FlatRecord::new();
        record.insert(path("filled"), json!("v"));
        record.insert(path("zero"), json!(0));
        record.insert(path("blank"), json!(""));

        assert!(record.has_content(&path("filled")));
        assert!(record.has_content(&path("zero")));
        assert!(!record.has_content(&path("blank")));
        assert!(!record.has_content(&path("missing")));
    }

    #[test]
    fn empty_cell_marker_is_the_empty_string_only() {
        assert!(is_empty_cell(&json!("")));
        assert!(!is_empty_cell(&json!("x")));
        assert!(!is_empty_cell(&json!(0)));
        assert!(!is_empty_cell(&json!(false)));
    }

    #[test]
    fn default_config_targets_frame_records() {
        let config = TableConfig::default();
        assert_eq!(config.records_key, "frame");
        assert_eq!(config.separator, "_");
    }
}
