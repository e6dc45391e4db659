//! CSV output with atomic temp-file replacement.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{MergeError, Result};
use crate::index::KeyedIndex;

/// Write the index's records to a delimited file, one row per record in
/// index iteration order.
///
/// The header row is the field ordering of the first record (any record
/// with the canonical field set would do); every other record must carry
/// exactly that field set, or the write fails with a schema error. Values
/// render through their `Display` form, so numeric fields come out as plain
/// decimal text.
///
/// The file is written to a sibling `.tmp` path and renamed into place on
/// success, so a failed run never leaves a readable partial output.
pub fn write_records(path: &Path, index: &KeyedIndex) -> Result<()> {
    let Some(first) = index.records().next() else {
        return Err(MergeError::Schema(
            "cannot write an empty index: no record to derive the header from".to_string(),
        ));
    };
    let field_order: Vec<String> = first.field_names().map(str::to_string).collect();

    let tmp_path = temp_path(path);
    let result = write_to(&tmp_path, path, index, &field_order);
    if result.is_err() {
        // Best effort; the rename never happened so no partial output is visible.
        let _ = fs::remove_file(&tmp_path);
        return result;
    }

    fs::rename(&tmp_path, path).map_err(|source| MergeError::DataSink {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} records to {}", index.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_to(
    tmp_path: &Path,
    final_path: &Path,
    index: &KeyedIndex,
    field_order: &[String],
) -> Result<()> {
    let sink_error = |source: csv::Error| match source.into_kind() {
        csv::ErrorKind::Io(source) => MergeError::DataSink {
            path: final_path.to_path_buf(),
            source,
        },
        kind => MergeError::DataSink {
            path: final_path.to_path_buf(),
            source: std::io::Error::other(format!("CSV serialization failed: {kind:?}")),
        },
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(tmp_path)
        .map_err(sink_error)?;

    writer.write_record(field_order).map_err(sink_error)?;

    for (key, record) in index.iter() {
        if record.len() != field_order.len() {
            return Err(MergeError::Schema(format!(
                "record '{key}' has {} fields, header has {}",
                record.len(),
                field_order.len()
            )));
        }

        let mut row = Vec::with_capacity(field_order.len());
        for field in field_order {
            let value = record.get(field).ok_or_else(|| {
                MergeError::Schema(format!(
                    "record '{key}' is missing output field '{field}'"
                ))
            })?;
            row.push(value.to_string());
        }
        writer.write_record(&row).map_err(sink_error)?;
    }

    writer.flush().map_err(|source| MergeError::DataSink {
        path: final_path.to_path_buf(),
        source,
    })?;
    Ok(())
}
