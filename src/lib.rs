//! A Rust library for merging state name and population CSV files, with
//! division-level aggregation of population shares.
//!
//! The pipeline is a single linear pass: load both delimited inputs, index
//! them by FIPS code, left-join the population onto the name records,
//! compute each state's percentage share of its census division, and write
//! the enriched table back out.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod index;
pub mod merge;
pub mod pipeline;
pub mod reader;
pub mod record;
pub mod writer;

// Re-export the most common types for easier use
pub use config::MergeConfig;
pub use error::{MergeError, Result};
pub use index::{KeyedIndex, SkippedDuplicate};
pub use pipeline::{MergeSummary, run};
pub use record::{Record, Value};

// Core operations
pub use aggregate::{apply_group_shares, group_totals};
pub use merge::left_join_numeric;
pub use reader::read_records;
pub use writer::write_records;
