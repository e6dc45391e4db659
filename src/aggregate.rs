//! Group-wise totals and percentage shares.
//!
//! Two passes over the merged index, both in index iteration order: first
//! accumulate a total per group, then store each record's share of its
//! group total. Both passes require the numeric value field the merger
//! produced; a record still carrying text there is a precondition
//! violation.

use indexmap::IndexMap;
use log::debug;

use crate::error::{MergeError, Result};
use crate::index::KeyedIndex;
use crate::record::Value;

/// Accumulate a running total of `value_field` per distinct `group_field`
/// value. The returned map iterates groups in first-seen order.
///
/// Summation order is the index's iteration order. All inputs in this
/// domain are non-negative, so ordering only affects floating-point
/// rounding.
pub fn group_totals(
    index: &KeyedIndex,
    group_field: &str,
    value_field: &str,
) -> Result<IndexMap<String, f64>> {
    let mut totals: IndexMap<String, f64> = IndexMap::new();

    for record in index.records() {
        let group = record.require_text(group_field)?.to_string();
        let value = record.require_number(value_field)?;
        *totals.entry(group).or_insert(0.0) += value;
    }

    debug!("Accumulated {} group totals from '{value_field}'", totals.len());
    Ok(totals)
}

/// Compute each record's percentage share of its group total and store it
/// under `target_field`. Returns the group totals.
///
/// Runs the totals pass, then a second pass storing
/// `100 * value / total[group]` in every record. A group whose total is
/// exactly zero is a [`MergeError::DivisionByZero`] naming the group.
pub fn apply_group_shares(
    index: &mut KeyedIndex,
    group_field: &str,
    value_field: &str,
    target_field: &str,
) -> Result<IndexMap<String, f64>> {
    let totals = group_totals(index, group_field, value_field)?;

    for record in index.records_mut() {
        let group = record.require_text(group_field)?.to_string();
        let value = record.require_number(value_field)?;

        // Every group seen here was seen by the totals pass.
        let total = totals.get(&group).copied().unwrap_or(0.0);
        if total == 0.0 {
            return Err(MergeError::DivisionByZero(group));
        }

        record.insert(target_field, Value::Number(100.0 * value / total));
    }

    Ok(totals)
}
