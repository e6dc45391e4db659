//! Configuration for the merge pipeline.

/// Configuration for the merge pipeline
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Key column in the name file (the state FIPS code)
    pub name_key_field: String,
    /// Key column in the population file (same code space as the name key)
    pub pop_key_field: String,
    /// Display column in the name file, used in duplicate diagnostics
    pub display_field: String,
    /// Categorical column the aggregation groups by
    pub division_field: String,
    /// Numeric-as-text column pulled from the population file
    pub pop_source_field: String,
    /// Name of the numeric field the merger appends
    pub pop_field: String,
    /// Name of the percentage field the aggregator appends
    pub percent_field: String,
    /// Key of the national aggregate row, excluded before the join
    pub national_key: String,
    /// How many sample records the binary prints from each input
    pub sample_rows: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            name_key_field: "State".to_string(),
            pop_key_field: "STATEFP".to_string(),
            display_field: "Name".to_string(),
            division_field: "Division".to_string(),
            pop_source_field: "pop".to_string(),
            pop_field: "pop".to_string(),
            percent_field: "percent".to_string(),
            national_key: "00".to_string(),
            sample_rows: 3,
        }
    }
}
