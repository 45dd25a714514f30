use readiness_core::{round2, RawReport};

use crate::model::{AggregateScore, BucketReport, FinalReport, TestReport};
use crate::scoring::{effective_weight, Check};

/// Fixed bucket layout of the final report. Order is part of the external
/// contract: test ids are assigned by position, not by content.
const BUCKETS: [(&str, &[Check]); 6] = [
    (
        "Data Quality",
        &[
            Check::ColumnMissing,
            Check::RowMissing,
            Check::ExactRowDuplicates,
        ],
    ),
    ("Data Relevance and Completeness", &[Check::CoverageCheck]),
    (
        "Variance and Correctness",
        &[Check::NumericVariance, Check::CategoricalVariation],
    ),
    (
        "Standardisation",
        &[Check::FileFormatCheck, Check::UniformEncoding],
    ),
    ("Regular Refresh", &[Check::DateOrTimestampFieldsFound]),
    ("Documentation", &[Check::DocumentationPresence]),
];

/// Combine a raw report and its aggregate score into the bucketed final
/// report. Buckets whose every member is inapplicable are still emitted
/// with weight 0 so the key set stays stable for averaging.
pub fn render_final_report(raw: &RawReport, score: &AggregateScore) -> FinalReport {
    BUCKETS
        .iter()
        .enumerate()
        .map(|(bucket_idx, (bucket, checks))| {
            let tests: Vec<TestReport> = checks
                .iter()
                .enumerate()
                .map(|(test_idx, check)| {
                    let max_score = effective_weight(*check, raw);
                    let earned = score
                        .detailed_scores
                        .get(check.key())
                        .copied()
                        .unwrap_or(0.0);
                    TestReport {
                        id: format!("{}.{}", bucket_idx + 1, test_idx + 1),
                        key: check.key().to_string(),
                        title: check.title().to_string(),
                        note: note_for(*check, raw),
                        score: earned,
                        max_score,
                    }
                })
                .collect();
            let weight = tests.iter().map(|test| test.max_score).sum();
            BucketReport {
                bucket: bucket.to_string(),
                weight,
                tests,
            }
        })
        .collect()
}

/// Rendering-only filter for human display: canonical data keeps the
/// 0-weight buckets, the page does not.
pub fn display_buckets(report: &FinalReport) -> Vec<&BucketReport> {
    report.iter().filter(|bucket| bucket.weight > 0.0).collect()
}

/// Natural-language note for one check, derived purely from the raw
/// metric values.
fn note_for(check: Check, raw: &RawReport) -> String {
    match check {
        Check::ColumnMissing => {
            let filled = raw.number_of_columns - raw.column_missing_count.min(raw.number_of_columns);
            format!(
                "{filled} out of {} columns have at least 70% of their data filled.",
                raw.number_of_columns
            )
        }
        Check::RowMissing => format!(
            "{}% of rows have at least 50% of their fields filled.",
            round2(100.0 - raw.row_missing_percentage)
        ),
        Check::ExactRowDuplicates => format!(
            "{}% of rows are unique.",
            round2(100.0 - raw.exact_row_duplicates_percentage)
        ),
        Check::CoverageCheck => match raw.region_coverage.as_applicable() {
            Some(missing) => format!(
                "{}% coverage achieved for region metadata.",
                round2(100.0 - missing)
            ),
            None => not_applicable_note(),
        },
        Check::NumericVariance => match raw.low_variance_numeric_columns.as_applicable() {
            Some(columns) if columns.is_empty() => {
                "All numeric columns show healthy variance.".to_string()
            }
            Some(columns) => format!(
                "{} of {} numeric columns show near-constant values.",
                columns.len(),
                raw.number_of_numeric_columns
            ),
            None => not_applicable_note(),
        },
        Check::CategoricalVariation => match raw.dominant_categorical_columns.as_applicable() {
            Some(columns) if columns.is_empty() => {
                "No categorical column is dominated by a single value.".to_string()
            }
            Some(columns) => format!(
                "{} of {} categorical columns are dominated by a single value.",
                columns.len(),
                raw.number_of_categorical_columns
            ),
            None => not_applicable_note(),
        },
        Check::FileFormatCheck => {
            if raw.file_format.is_valid() {
                "Files are in a standard machine-readable format.".to_string()
            } else {
                "File format is outside the supported standard formats.".to_string()
            }
        }
        Check::UniformEncoding => match raw.datetime_issues_percentage.as_applicable() {
            Some(issues) => format!(
                "{}% of date values parse under the hinted format.",
                round2(100.0 - issues)
            ),
            None => not_applicable_note(),
        },
        Check::DateOrTimestampFieldsFound => {
            match raw.date_or_timestamp_fields_found.as_applicable() {
                Some(fields) => format!(
                    "Date or timestamp fields found ({}); {}% of their values parse cleanly.",
                    fields.join(", "),
                    round2(100.0 - raw.date_or_timestamp_issues_percentage.value_or(0.0))
                ),
                None => not_applicable_note(),
            }
        }
        Check::DocumentationPresence => {
            if raw.documentation_found {
                "Documentation includes comprehensive data dictionary files.".to_string()
            } else {
                "Dataset requires documentation to be added.".to_string()
            }
        }
    }
}

fn not_applicable_note() -> String {
    "Not applicable for this dataset.".to_string()
}
