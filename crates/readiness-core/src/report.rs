use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::finding::Finding;

/// Round to two decimals, the precision of every persisted percentage
/// and score.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Verdict of the file-format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Valid,
    Invalid,
}

impl FileFormat {
    pub fn is_valid(&self) -> bool {
        matches!(self, FileFormat::Valid)
    }
}

/// Canonical raw readiness report for one dataset unit.
///
/// The serde field names are the external flat-key contract: every
/// evaluator output key appears exactly once, so the key set is identical
/// across all units of a batch — the precondition the averager checks.
/// Conditionally applicable fields default to `NotApplicable` when absent;
/// a missing always-applicable field is a deserialization error, which is
/// the hard failure the scoring engine requires for that unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawReport {
    /// Per-column missing percentage, for columns above the missing
    /// threshold.
    pub column_missing: BTreeMap<String, f64>,
    pub column_missing_count: u64,
    pub column_missing_percentage: f64,
    pub number_of_columns: u64,
    pub row_missing_count: u64,
    pub row_missing_percentage: f64,
    pub number_of_rows: u64,
    pub exact_row_duplicates: u64,
    pub exact_row_duplicates_percentage: f64,
    #[serde(default)]
    pub region_column: Finding<Vec<String>>,
    /// Percentage of missing values in the region column.
    #[serde(default)]
    pub region_coverage: Finding<f64>,
    #[serde(default)]
    pub low_variance_numeric_columns: Finding<Vec<String>>,
    pub percentage_low_variance_numeric_columns: f64,
    pub number_of_numeric_columns: u64,
    #[serde(default)]
    pub numeric_columns: Finding<Vec<String>>,
    #[serde(default)]
    pub dominant_categorical_columns: Finding<Vec<String>>,
    pub percentage_dominant_categorical_columns: f64,
    pub number_of_categorical_columns: u64,
    #[serde(default)]
    pub categorical_columns: Finding<Vec<String>>,
    pub file_format: FileFormat,
    #[serde(default)]
    pub date_column: Finding<Vec<String>>,
    pub number_of_date_columns: u64,
    /// Percentage of date values that fail to parse under the hinted
    /// format.
    #[serde(default)]
    pub datetime_issues_percentage: Finding<f64>,
    #[serde(default)]
    pub timestamp_column: Finding<Vec<String>>,
    pub number_of_timestamp_columns: u64,
    #[serde(default)]
    pub date_or_timestamp_fields_found: Finding<Vec<String>>,
    #[serde(default)]
    pub date_or_timestamp_issues_percentage: Finding<f64>,
    /// Percentage of non-null values in the label column.
    #[serde(default)]
    pub label_presence: Finding<f64>,
    pub documentation_found: bool,
}
