//! Keyed index construction with an explicit duplicate-key policy.

use indexmap::IndexMap;
use log::warn;

use crate::error::{MergeError, Result};
use crate::record::Record;

/// A record that was dropped because its key was already indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedDuplicate {
    /// The key that collided
    pub key: String,
    /// The display value of the dropped record, for diagnostics
    pub display: Option<String>,
}

/// An in-memory mapping from join key to exactly one record.
///
/// Iteration order is insertion order, which is input-file order with
/// duplicates and exclusions removed. Keys are unique by construction:
/// when the source contains the same key twice, the first occurrence wins
/// and later ones are dropped with a diagnostic (first-write-wins policy).
#[derive(Debug, Default)]
pub struct KeyedIndex {
    key_field: String,
    entries: IndexMap<String, Record>,
    duplicates: Vec<SkippedDuplicate>,
}

impl KeyedIndex {
    /// Build an index from a record sequence, keeping the FIRST record for
    /// each key and dropping later occurrences.
    ///
    /// Dropped records are logged and recorded in [`duplicates`]; duplicate
    /// keys are a recoverable condition, not an error. A record without the
    /// key field is a schema error.
    ///
    /// `display_field` names the column quoted in duplicate diagnostics,
    /// when the record has it.
    ///
    /// [`duplicates`]: KeyedIndex::duplicates
    pub fn build(
        records: Vec<Record>,
        key_field: &str,
        display_field: &str,
    ) -> Result<Self> {
        let mut index = Self {
            key_field: key_field.to_string(),
            entries: IndexMap::with_capacity(records.len()),
            duplicates: Vec::new(),
        };

        for record in records {
            let key = record.require_text(key_field)?.to_string();

            if index.entries.contains_key(&key) {
                let display = record
                    .get(display_field)
                    .map(std::string::ToString::to_string);
                warn!(
                    "Skipping record with duplicate key '{key}'{}",
                    display
                        .as_deref()
                        .map(|d| format!(" ({d})"))
                        .unwrap_or_default()
                );
                index.duplicates.push(SkippedDuplicate { key, display });
            } else {
                index.entries.insert(key, record);
            }
        }

        Ok(index)
    }

    /// The field this index was keyed on.
    #[must_use]
    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    /// Remove and return an entry, or fail with a schema error if the key
    /// is absent. Used to drop sentinel keys (the national aggregate row)
    /// before the join. Preserves the order of the remaining entries.
    pub fn exclude(&mut self, key: &str) -> Result<Record> {
        self.entries.shift_remove(key).ok_or_else(|| {
            MergeError::Schema(format!(
                "cannot exclude key '{key}': not present in index on '{}'",
                self.key_field
            ))
        })
    }

    /// Look up a record by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.entries.get(key)
    }

    /// Look up a record mutably by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Record> {
        self.entries.get_mut(key)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Iterate records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.values()
    }

    /// Iterate records mutably in insertion order.
    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut Record> {
        self.entries.values_mut()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Records dropped by the first-write-wins policy, in input order.
    #[must_use]
    pub fn duplicates(&self) -> &[SkippedDuplicate] {
        &self.duplicates
    }

    /// Number of indexed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
