use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column-name template for a numbered spreadsheet group.
///
/// Renders concrete column names by appending a 1-based suffix, e.g.
/// `IndexedKey::new("Artwork Title").at(2)` yields `"Artwork Title 2"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexedKey {
    prefix: &'static str,
}

impl IndexedKey {
    /// Create a template with a canonical static prefix.
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// Return the raw column prefix.
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Render the concrete column name for a 1-based position.
    pub fn at(&self, n: usize) -> String {
        format!("{} {}", self.prefix, n)
    }
}

/// True when a column value is usable: non-null and, for text, non-empty.
///
/// This is the single presence predicate used by the extractor, the flag
/// coercion, and suffix probing. It replaces the legacy exporter's implicit
/// truthiness, where an empty string and a missing column both meant absent.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

/// One legacy flat record as exported from the project spreadsheet.
///
/// Keys are either fixed column names (`Name`, `Latitude`, ...) or templated
/// with a 1-based integer suffix (`Artwork Title 1`, `Poem 2`, ...). There is
/// no fixed arity; callers discover suffixes by probing ascending positions.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SourceRecord(Map<String, Value>);

impl SourceRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap an already-parsed JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Set a column value. Mostly useful for building fixtures.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw column value, `None` when the column is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Verbatim copy of a scalar column.
    ///
    /// Absent columns stay absent (`None`); an explicit JSON `null` is copied
    /// through as `Some(Value::Null)`, matching the legacy output shape.
    pub fn scalar(&self, key: &str) -> Option<Value> {
        self.0.get(key).cloned()
    }

    /// True when the column holds a usable value per [`is_present`].
    pub fn has(&self, key: &str) -> bool {
        self.0.get(key).map(is_present).unwrap_or(false)
    }

    /// True when the numbered column at position `n` holds a usable value.
    pub fn has_indexed(&self, key: IndexedKey, n: usize) -> bool {
        self.has(&key.at(n))
    }

    /// Text content of a column, empty string when absent or unusable.
    ///
    /// Numbers and booleans render through their display form; structured
    /// values never occur in spreadsheet exports and collapse to empty.
    pub fn text_or_empty(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::Bool(flag)) => flag.to_string(),
            _ => String::new(),
        }
    }

    /// Text content of the numbered column at position `n`, or empty.
    pub fn text_indexed(&self, key: IndexedKey, n: usize) -> String {
        self.text_or_empty(&key.at(n))
    }

    /// Exact-match legacy boolean coercion.
    ///
    /// True only when the column holds the exact JSON string `"TRUE"`.
    /// `"true"`, boolean `true`, and numeric `1` all coerce to false; the
    /// frontend depends on this exact-string contract.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Value::String(text)) if text == "TRUE")
    }
}
