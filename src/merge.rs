//! Left join of a numeric field from a secondary index onto a primary one.

use log::debug;

use crate::error::{MergeError, Result};
use crate::index::KeyedIndex;
use crate::record::Value;

/// For every key in `primary` (in iteration order), look up the same key in
/// `secondary`, parse its `source_field` as a floating-point number, and
/// append it to the primary record under `target_field`.
///
/// This is a total left join: a primary key with no secondary counterpart
/// is a hard [`MergeError::JoinKey`] naming the missing key. There is no
/// null fallback. The secondary index is read-only.
///
/// A secondary record whose `source_field` is absent or does not parse as a
/// number is a schema error.
pub fn left_join_numeric(
    primary: &mut KeyedIndex,
    secondary: &KeyedIndex,
    source_field: &str,
    target_field: &str,
) -> Result<()> {
    let keys: Vec<String> = primary.keys().map(str::to_string).collect();

    for key in keys {
        let other = secondary
            .get(&key)
            .ok_or_else(|| MergeError::JoinKey(key.clone()))?;

        let raw = other.require_text(source_field)?;
        let number: f64 = raw.parse().map_err(|_| {
            MergeError::Schema(format!(
                "field '{source_field}' for key '{key}' is not numeric: '{raw}'"
            ))
        })?;

        // The key was drawn from the primary index just above.
        if let Some(record) = primary.get_mut(&key) {
            record.insert(target_field, Value::Number(number));
        }
    }

    debug!(
        "Joined '{source_field}' onto {} primary records as '{target_field}'",
        primary.len()
    );
    Ok(())
}
