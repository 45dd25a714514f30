use std::collections::BTreeMap;

use readiness_core::RawReport;
use serde::{Deserialize, Serialize};

/// Weighted score summary for one raw report.
///
/// `total_weights` is the sum of the *effective* (post-applicability)
/// weights; inapplicable checks contribute to neither total. Computed once
/// per raw report and recomputed wholesale when the raw report changes
/// (after averaging).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateScore {
    pub total_weights: f64,
    pub total_score: f64,
    /// The readiness score: 0-100, 0 when no check applies.
    pub total_percentage: f64,
    pub detailed_scores: BTreeMap<String, f64>,
}

/// The persisted raw-report artifact: aggregate fields first, then the
/// flat raw metric fields, merged into one JSON object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredReport {
    #[serde(flatten)]
    pub score: AggregateScore,
    #[serde(flatten)]
    pub raw: RawReport,
}

/// The rendered final report: a fixed-order list of buckets.
pub type FinalReport = Vec<BucketReport>;

/// A display grouping of related checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketReport {
    pub bucket: String,
    /// Sum of the member tests' effective max scores.
    pub weight: f64,
    pub tests: Vec<TestReport>,
}

/// One check as displayed in the final report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    /// Positional id, `<bucket_index>.<test_index>`.
    pub id: String,
    pub key: String,
    pub title: String,
    pub note: String,
    pub score: f64,
    /// Effective (post-applicability) weight of the check.
    pub max_score: f64,
}
