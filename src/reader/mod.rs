//! CSV loading into ordered record sequences.

use std::path::Path;

use log::debug;

use crate::error::{MergeError, Result};
use crate::record::{Record, Value};

/// Read a delimited file with a header row into an ordered sequence of
/// records, one per body row, preserving input row order.
///
/// Field names are exactly the header's column names. No type conversion
/// happens here: every value is the raw string from the file. A row whose
/// field count differs from the header is a schema error; rows are never
/// padded or truncated.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)
        .map_err(|source| MergeError::DataSource {
            path: path.to_path_buf(),
            source,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| MergeError::DataSource {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| {
            if let csv::ErrorKind::UnequalLengths { pos, expected_len, len } = source.kind() {
                return MergeError::Schema(format!(
                    "{}: row{} has {len} fields, header has {expected_len}",
                    path.display(),
                    pos.as_ref()
                        .map(|p| format!(" at line {}", p.line()))
                        .unwrap_or_default(),
                ));
            }
            MergeError::DataSource {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.clone(), Value::Text(value.to_string())))
            .collect();
        records.push(record);
    }

    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}
