//! Shared helpers for the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use statepop::Record;

/// Write a CSV file into `dir` and return its path.
pub fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test CSV");
    path
}

/// The three-state name file used across tests: two real states plus the
/// national aggregate row.
pub fn names_csv(dir: &Path) -> PathBuf {
    write_csv(
        dir,
        "state_name.csv",
        "State,Name,Division\n\
         36,New York,Mid-Atlantic\n\
         06,California,Pacific\n\
         00,United States,National\n",
    )
}

/// Population counterparts for the two real states only.
pub fn pops_csv(dir: &Path) -> PathBuf {
    write_csv(
        dir,
        "state_pop.csv",
        "STATEFP,pop\n36,19000000\n06,39000000\n",
    )
}

/// Load records from a CSV literal without touching the filesystem layout
/// of the test.
pub fn records_from(dir: &Path, content: &str) -> Vec<Record> {
    let path = write_csv(dir, "records.csv", content);
    statepop::read_records(&path).expect("read test records")
}
