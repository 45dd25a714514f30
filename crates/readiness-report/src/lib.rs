//! Scoring and aggregation engine for readiness reports.
//!
//! Takes the raw report produced by the evaluators, applies the
//! applicability/weight policy and per-check formulas, renders the
//! bucketed final report, and merges batches of scored reports into one
//! averaged report that re-enters the same scoring path.

pub mod average;
pub mod errors;
pub mod model;
pub mod render;
pub mod scoring;
pub mod writer;

pub use average::{average_reports, rescore_averaged_report, MergeRule};
pub use errors::ReportError;
pub use model::{AggregateScore, BucketReport, FinalReport, ScoredReport, TestReport};
pub use render::{display_buckets, render_final_report};
pub use scoring::{compute_aggregate_score, effective_weight, Check};
pub use writer::{
    final_report_filename, raw_report_filename, write_json_report, AVERAGE_FINAL_REPORT_FILENAME,
    AVERAGE_RAW_REPORT_FILENAME,
};
