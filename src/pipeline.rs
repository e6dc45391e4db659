//! Fixed composition of the merge pipeline.
//!
//! Load both inputs, index them, drop the national aggregate row, left-join
//! the population field, aggregate by division, and write the enriched
//! table. Strictly sequential and fully in memory; every stage completes
//! before the next begins, and any error aborts the run.

use std::path::Path;

use log::info;

use crate::aggregate::apply_group_shares;
use crate::config::MergeConfig;
use crate::error::Result;
use crate::index::KeyedIndex;
use crate::merge::left_join_numeric;
use crate::reader::read_records;
use crate::writer::write_records;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    /// Rows in the output file (header not counted)
    pub rows_written: usize,
    /// Distinct division values seen during aggregation
    pub divisions: usize,
    /// Name records dropped by the duplicate-key policy
    pub duplicates_skipped: usize,
}

/// Run the whole pipeline: `name_path` left-joined with `pop_path`,
/// written to `out_path`.
pub fn run(
    name_path: &Path,
    pop_path: &Path,
    out_path: &Path,
    config: &MergeConfig,
) -> Result<MergeSummary> {
    info!("Reading names from {}", name_path.display());
    let name_records = read_records(name_path)?;

    info!("Reading populations from {}", pop_path.display());
    let pop_records = read_records(pop_path)?;

    let mut names = KeyedIndex::build(
        name_records,
        &config.name_key_field,
        &config.display_field,
    )?;
    let duplicates_skipped = names.duplicates().len();

    // The national row is not a state; drop it before the join.
    names.exclude(&config.national_key)?;

    let pops = KeyedIndex::build(pop_records, &config.pop_key_field, &config.pop_key_field)?;

    left_join_numeric(
        &mut names,
        &pops,
        &config.pop_source_field,
        &config.pop_field,
    )?;

    let totals = apply_group_shares(
        &mut names,
        &config.division_field,
        &config.pop_field,
        &config.percent_field,
    )?;

    write_records(out_path, &names)?;
    info!("Wrote {} rows to {}", names.len(), out_path.display());

    Ok(MergeSummary {
        rows_written: names.len(),
        divisions: totals.len(),
        duplicates_skipped,
    })
}
