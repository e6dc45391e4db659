//! Error handling for the merge pipeline.

use std::path::PathBuf;

/// Specialized error type for the merge pipeline
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// Error opening or reading an input file
    #[error("Data source error for {path}: {source}")]
    DataSource {
        /// Path of the input that failed
        path: PathBuf,
        /// Underlying CSV/IO error
        source: csv::Error,
    },

    /// Error creating or writing the output file
    #[error("Data sink error for {path}: {source}")]
    DataSink {
        /// Path of the output that failed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Row/column shape mismatch or a missing expected field
    #[error("Schema error: {0}")]
    Schema(String),

    /// A primary key with no counterpart in the secondary index
    #[error("Join key error: no match for key '{0}' in secondary index")]
    JoinKey(String),

    /// An aggregation group whose total is exactly zero
    #[error("Division by zero: group '{0}' has a zero total")]
    DivisionByZero(String),
}

/// Result type for merge pipeline operations
pub type Result<T> = std::result::Result<T, MergeError>;
