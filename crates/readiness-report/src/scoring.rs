use std::collections::BTreeMap;

use readiness_core::{round2, RawReport};

use crate::model::AggregateScore;

/// One named quality dimension with a point weight and a scoring formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    ColumnMissing,
    RowMissing,
    ExactRowDuplicates,
    CoverageCheck,
    NumericVariance,
    CategoricalVariation,
    FileFormatCheck,
    UniformEncoding,
    DateOrTimestampFieldsFound,
    DocumentationPresence,
}

impl Check {
    /// Every check, in scoring order.
    pub const ALL: [Check; 10] = [
        Check::ColumnMissing,
        Check::RowMissing,
        Check::ExactRowDuplicates,
        Check::CoverageCheck,
        Check::NumericVariance,
        Check::CategoricalVariation,
        Check::FileFormatCheck,
        Check::UniformEncoding,
        Check::DateOrTimestampFieldsFound,
        Check::DocumentationPresence,
    ];

    /// Key under which the check's score is recorded.
    pub fn key(&self) -> &'static str {
        match self {
            Check::ColumnMissing => "column_missing",
            Check::RowMissing => "row_missing",
            Check::ExactRowDuplicates => "exact_row_duplicates",
            Check::CoverageCheck => "coverage_check",
            Check::NumericVariance => "numeric_variance",
            Check::CategoricalVariation => "categorical_variation",
            Check::FileFormatCheck => "file_format_check",
            Check::UniformEncoding => "uniform_encoding",
            Check::DateOrTimestampFieldsFound => "date_or_timestamp_fields_found",
            Check::DocumentationPresence => "documentation_presence",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Check::ColumnMissing => "Column-wise Missing",
            Check::RowMissing => "Row-wise Missing",
            Check::ExactRowDuplicates => "Exact Row Duplicates",
            Check::CoverageCheck => "Coverage Check",
            Check::NumericVariance => "Numeric Variance",
            Check::CategoricalVariation => "Categorical Variation",
            Check::FileFormatCheck => "File Format Check",
            Check::UniformEncoding => "Uniform Encoding",
            Check::DateOrTimestampFieldsFound => "Timestamps Presence",
            Check::DocumentationPresence => "Documentation Presence",
        }
    }

    /// Static point value of the check when applicable.
    pub fn base_weight(&self) -> f64 {
        match self {
            Check::ColumnMissing => 15.0,
            Check::RowMissing => 10.0,
            Check::ExactRowDuplicates => 10.0,
            Check::CoverageCheck => 10.0,
            Check::NumericVariance => 5.0,
            Check::CategoricalVariation => 5.0,
            Check::FileFormatCheck => 10.0,
            Check::UniformEncoding => 10.0,
            Check::DateOrTimestampFieldsFound => 10.0,
            Check::DocumentationPresence => 15.0,
        }
    }

    /// Whether the check's precondition holds for this report. Each
    /// conditionally weighted check reads exactly one applicability
    /// signal, the `Finding` its evaluator emitted.
    pub fn is_applicable(&self, raw: &RawReport) -> bool {
        match self {
            Check::ColumnMissing
            | Check::RowMissing
            | Check::ExactRowDuplicates
            | Check::FileFormatCheck
            | Check::DocumentationPresence => true,
            Check::CoverageCheck => raw.region_coverage.is_applicable(),
            Check::NumericVariance => raw.low_variance_numeric_columns.is_applicable(),
            Check::CategoricalVariation => raw.dominant_categorical_columns.is_applicable(),
            Check::UniformEncoding => raw.datetime_issues_percentage.is_applicable(),
            Check::DateOrTimestampFieldsFound => {
                raw.date_or_timestamp_fields_found.is_applicable()
            }
        }
    }
}

/// Effective weight of a check for this report: the base weight, or zero
/// when the check is inapplicable.
pub fn effective_weight(check: Check, raw: &RawReport) -> f64 {
    if check.is_applicable(raw) {
        check.base_weight()
    } else {
        0.0
    }
}

/// Apply the applicability/weight policy and per-check formulas to a raw
/// report.
pub fn compute_aggregate_score(raw: &RawReport) -> AggregateScore {
    let mut total_weights = 0.0;
    let mut total_score = 0.0;
    let mut detailed_scores = BTreeMap::new();

    for check in Check::ALL {
        let weight = effective_weight(check, raw);
        let earned = if weight > 0.0 {
            round2(earned_score(check, weight, raw))
        } else {
            0.0
        };
        total_weights += weight;
        total_score += earned;
        detailed_scores.insert(check.key().to_string(), earned);
    }

    let total_percentage = if total_weights > 0.0 {
        round2(total_score / total_weights * 100.0)
    } else {
        0.0
    };

    AggregateScore {
        total_weights,
        total_score: round2(total_score),
        total_percentage,
        detailed_scores,
    }
}

/// Linear penalty proportional to a violation fraction given in percent.
fn linear(weight: f64, violation_percentage: f64) -> f64 {
    (weight * (1.0 - violation_percentage / 100.0)).max(0.0)
}

/// Ratio as a percentage, full score (0% violation) for an empty
/// denominator.
fn ratio_percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn earned_score(check: Check, weight: f64, raw: &RawReport) -> f64 {
    match check {
        Check::ColumnMissing => linear(
            weight,
            ratio_percentage(raw.column_missing_count, raw.number_of_columns),
        ),
        Check::RowMissing => linear(
            weight,
            ratio_percentage(raw.row_missing_count, raw.number_of_rows),
        ),
        Check::ExactRowDuplicates => linear(
            weight,
            ratio_percentage(raw.exact_row_duplicates, raw.number_of_rows),
        ),
        Check::CoverageCheck => linear(weight, raw.region_coverage.value_or(0.0)),
        Check::NumericVariance => {
            linear(weight, raw.percentage_low_variance_numeric_columns)
        }
        Check::CategoricalVariation => {
            linear(weight, raw.percentage_dominant_categorical_columns)
        }
        Check::FileFormatCheck => {
            if raw.file_format.is_valid() {
                weight
            } else {
                0.0
            }
        }
        Check::UniformEncoding => linear(weight, raw.datetime_issues_percentage.value_or(0.0)),
        Check::DateOrTimestampFieldsFound => linear(
            weight,
            raw.date_or_timestamp_issues_percentage.value_or(0.0),
        ),
        Check::DocumentationPresence => {
            if raw.documentation_found {
                weight
            } else {
                0.0
            }
        }
    }
}
