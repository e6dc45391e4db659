//! Record and value types for tabular data.
//!
//! Every value starts life as text, exactly as it appears in the source
//! file. The merge and aggregation stages append numeric fields; nothing
//! ever converts a field in place.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{MergeError, Result};

/// A single field value, either raw text from the source file or a number
/// derived by a pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Raw text as read from the source file
    Text(String),
    /// A numeric field appended by the merger or aggregator
    Number(f64),
}

impl Value {
    /// Borrow the text content, if this value is still text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Number(_) => None,
        }
    }

    /// Borrow the numeric content, if this value has been converted.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Text(_) => None,
            Self::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            // Standard f64 formatting: decimal text, never scientific
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One row of tabular data: an insertion-ordered mapping from field name to
/// value. Field order is the source header order plus any appended fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Insert or replace a field. New fields are appended after all
    /// existing ones.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    /// Field names in record order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fetch a field that must be present, or fail with a schema error
    /// naming the field.
    pub fn require(&self, field: &str) -> Result<&Value> {
        self.get(field)
            .ok_or_else(|| MergeError::Schema(format!("record is missing field '{field}'")))
    }

    /// Fetch a field that must still be text, or fail with a schema error.
    pub fn require_text(&self, field: &str) -> Result<&str> {
        self.require(field)?.as_text().ok_or_else(|| {
            MergeError::Schema(format!("field '{field}' is not a text value"))
        })
    }

    /// Fetch a field that must already be numeric, or fail with a schema
    /// error. Used by stages whose precondition is that an earlier stage
    /// has produced the number.
    pub fn require_number(&self, field: &str) -> Result<f64> {
        self.require(field)?.as_number().ok_or_else(|| {
            MergeError::Schema(format!("field '{field}' is not a numeric value"))
        })
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_as_plain_decimal_text() {
        assert_eq!(Value::Number(19_000_000.0).to_string(), "19000000");
        assert_eq!(Value::Number(12.5).to_string(), "12.5");
        assert_eq!(Value::Number(0.000_125).to_string(), "0.000125");
    }

    #[test]
    fn insert_appends_new_fields_after_existing_ones() {
        let mut rec = Record::new();
        rec.insert("State", Value::Text("36".into()));
        rec.insert("Name", Value::Text("New York".into()));
        rec.insert("pop", Value::Number(19_000_000.0));

        let names: Vec<&str> = rec.field_names().collect();
        assert_eq!(names, ["State", "Name", "pop"]);
    }

    #[test]
    fn require_number_rejects_text_fields() {
        let mut rec = Record::new();
        rec.insert("pop", Value::Text("19000000".into()));
        assert!(rec.require_number("pop").is_err());
    }
}
