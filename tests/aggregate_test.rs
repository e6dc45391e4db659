//! Division totals and percentage shares.

mod common;

use statepop::{KeyedIndex, MergeError, apply_group_shares, group_totals, left_join_numeric};
use tempfile::tempdir;

fn merged_index(dir: &std::path::Path) -> KeyedIndex {
    let names = common::records_from(
        dir,
        "State,Name,Division\n\
         36,New York,Mid-Atlantic\n\
         34,New Jersey,Mid-Atlantic\n\
         06,California,Pacific\n",
    );
    let pops = common::records_from(
        dir,
        "STATEFP,pop\n36,19000000\n34,9000000\n06,39000000\n",
    );

    let mut index = KeyedIndex::build(names, "State", "Name").unwrap();
    let pops = KeyedIndex::build(pops, "STATEFP", "STATEFP").unwrap();
    left_join_numeric(&mut index, &pops, "pop", "pop").unwrap();
    index
}

#[test]
fn totals_accumulate_per_division_in_first_seen_order() {
    let dir = tempdir().unwrap();
    let index = merged_index(dir.path());

    let totals = group_totals(&index, "Division", "pop").unwrap();
    let groups: Vec<&String> = totals.keys().collect();
    assert_eq!(groups, ["Mid-Atlantic", "Pacific"]);
    assert_eq!(totals["Mid-Atlantic"], 28_000_000.0);
    assert_eq!(totals["Pacific"], 39_000_000.0);
}

/// For every division the percentages sum to 100 within floating-point
/// tolerance.
#[test]
fn shares_sum_to_one_hundred_per_division() {
    let dir = tempdir().unwrap();
    let mut index = merged_index(dir.path());

    let totals = apply_group_shares(&mut index, "Division", "pop", "percent").unwrap();

    for division in totals.keys() {
        let sum: f64 = index
            .records()
            .filter(|r| r.get("Division").unwrap().as_text() == Some(division.as_str()))
            .map(|r| r.get("percent").unwrap().as_number().unwrap())
            .sum();
        assert!(
            (sum - 100.0).abs() < 1e-9 * 100.0,
            "division {division} sums to {sum}"
        );
    }

    // A state alone in its division holds the whole share.
    let ca = index.get("06").unwrap();
    assert_eq!(ca.get("percent").unwrap().as_number(), Some(100.0));
}

/// A record that never went through the merge is a precondition violation.
#[test]
fn text_population_is_a_schema_error() {
    let dir = tempdir().unwrap();
    let names = common::records_from(
        dir.path(),
        "State,Name,Division,pop\n36,New York,Mid-Atlantic,19000000\n",
    );
    let index = KeyedIndex::build(names, "State", "Name").unwrap();

    // pop is still text: the merge stage never ran.
    let result = group_totals(&index, "Division", "pop");
    assert!(matches!(result, Err(MergeError::Schema(_))));
}

/// A zero division total must be caught before the share computation.
#[test]
fn zero_division_total_is_rejected() {
    let dir = tempdir().unwrap();
    let names = common::records_from(
        dir.path(),
        "State,Name,Division\n72,Puerto Rico,Territories\n78,Virgin Islands,Territories\n",
    );
    let pops = common::records_from(dir.path(), "STATEFP,pop\n72,0\n78,0\n");

    let mut index = KeyedIndex::build(names, "State", "Name").unwrap();
    let pops = KeyedIndex::build(pops, "STATEFP", "STATEFP").unwrap();
    left_join_numeric(&mut index, &pops, "pop", "pop").unwrap();

    let err = apply_group_shares(&mut index, "Division", "pop", "percent").unwrap_err();
    match err {
        MergeError::DivisionByZero(group) => assert_eq!(group, "Territories"),
        other => panic!("expected DivisionByZero, got {other:?}"),
    }
}
