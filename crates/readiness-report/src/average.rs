use std::collections::{BTreeSet, HashSet};

use readiness_core::{round2, RawReport};
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::ReportError;
use crate::model::ScoredReport;
use crate::scoring::{compute_aggregate_score, Check};

/// How one field of a scored report is folded across a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// Exact arithmetic mean: retained sum, one division.
    Average,
    /// Plain accumulation.
    Sum,
    /// Deduplicated union, sorted for determinism.
    ListUnion,
    /// Nested mapping folded key-by-key with this same table.
    Recurse,
    /// Last-write-wins for fields with no meaningful aggregate.
    Overwrite,
}

const AVERAGE_KEYS: [&str; 12] = [
    "total_weights",
    "total_score",
    "total_percentage",
    "column_missing_percentage",
    "row_missing_percentage",
    "exact_row_duplicates_percentage",
    "region_coverage",
    "percentage_low_variance_numeric_columns",
    "percentage_dominant_categorical_columns",
    "datetime_issues_percentage",
    "date_or_timestamp_issues_percentage",
    "label_presence",
];

const SUM_KEYS: [&str; 9] = [
    "column_missing_count",
    "number_of_columns",
    "row_missing_count",
    "number_of_rows",
    "exact_row_duplicates",
    "number_of_numeric_columns",
    "number_of_categorical_columns",
    "number_of_date_columns",
    "number_of_timestamp_columns",
];

const LIST_UNION_KEYS: [&str; 8] = [
    "region_column",
    "low_variance_numeric_columns",
    "numeric_columns",
    "dominant_categorical_columns",
    "categorical_columns",
    "date_column",
    "timestamp_column",
    "date_or_timestamp_fields_found",
];

/// Classification of every known top-level key into exactly one merge
/// category. Check keys collide with top-level raw fields
/// (`exact_row_duplicates` is both a score key and a count), so keys
/// inside `detailed_scores` are classified separately by
/// [`nested_rule_for`].
pub fn rule_for(key: &str) -> MergeRule {
    if key == "detailed_scores" {
        return MergeRule::Recurse;
    }
    if AVERAGE_KEYS.contains(&key) {
        return MergeRule::Average;
    }
    if SUM_KEYS.contains(&key) {
        return MergeRule::Sum;
    }
    if LIST_UNION_KEYS.contains(&key) {
        return MergeRule::ListUnion;
    }
    MergeRule::Overwrite
}

/// Classification for keys inside `detailed_scores`: every per-check
/// score is averaged.
pub fn nested_rule_for(key: &str) -> MergeRule {
    if Check::ALL.iter().any(|check| check.key() == key) {
        return MergeRule::Average;
    }
    rule_for(key)
}

/// Fold N scored reports into one synthetic averaged report.
///
/// Precondition: all reports carry identical key sets (top-level and
/// inside `detailed_scores`); a mismatch fails before any output is
/// produced. Averages are computed from retained sums with a single
/// division, so the result is exact and independent of fold order.
pub fn average_reports(reports: &[Map<String, Value>]) -> Result<Map<String, Value>, ReportError> {
    let first = reports.first().ok_or(ReportError::EmptyBatch)?;
    check_key_sets(reports)?;
    debug!(reports = reports.len(), "averaging readiness reports");

    let mut merged = Map::new();
    for key in first.keys() {
        let values: Vec<&Value> = reports.iter().map(|report| &report[key]).collect();
        merged.insert(key.clone(), apply_rule(rule_for(key), key, &values)?);
    }
    Ok(merged)
}

/// Re-enter the single-file scoring path with an averaged report: its raw
/// portion is deserialized and scored exactly like a single unit.
pub fn rescore_averaged_report(merged: &Map<String, Value>) -> Result<ScoredReport, ReportError> {
    let raw: RawReport = serde_json::from_value(Value::Object(merged.clone()))?;
    let score = compute_aggregate_score(&raw);
    Ok(ScoredReport { score, raw })
}

fn check_key_sets(reports: &[Map<String, Value>]) -> Result<(), ReportError> {
    let expected: HashSet<&String> = reports[0].keys().collect();
    for (idx, report) in reports.iter().enumerate().skip(1) {
        let found: HashSet<&String> = report.keys().collect();
        if found != expected {
            let mut diff: Vec<&str> = expected
                .symmetric_difference(&found)
                .map(|key| key.as_str())
                .collect();
            diff.sort_unstable();
            return Err(ReportError::ShapeMismatch(format!(
                "report {} differs on keys: {}",
                idx + 1,
                diff.join(", ")
            )));
        }
    }
    Ok(())
}

fn apply_rule(rule: MergeRule, key: &str, values: &[&Value]) -> Result<Value, ReportError> {
    match rule {
        MergeRule::Average => Ok(merge_average(values)),
        MergeRule::Sum => Ok(merge_sum(values)),
        MergeRule::ListUnion => Ok(merge_list_union(values)),
        MergeRule::Recurse => merge_nested(key, values),
        MergeRule::Overwrite => Ok(overwrite(values)),
    }
}

/// Retained-sum mean. A non-numeric value (the `"None"` sentinel in one
/// of the inputs) means mixed applicability, which has no meaningful
/// mean; the rule falls back to last-write-wins.
fn merge_average(values: &[&Value]) -> Value {
    let Some(numbers) = as_numbers(values) else {
        return overwrite(values);
    };
    let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;
    Value::from(round2(mean))
}

fn merge_sum(values: &[&Value]) -> Value {
    if let Some(integers) = values
        .iter()
        .map(|value| value.as_u64())
        .collect::<Option<Vec<u64>>>()
    {
        return Value::from(integers.iter().sum::<u64>());
    }
    let Some(numbers) = as_numbers(values) else {
        return overwrite(values);
    };
    Value::from(round2(numbers.iter().sum::<f64>()))
}

fn merge_list_union(values: &[&Value]) -> Value {
    let mut union = BTreeSet::new();
    for value in values {
        let Some(items) = value.as_array() else {
            return overwrite(values);
        };
        for item in items {
            let Some(text) = item.as_str() else {
                return overwrite(values);
            };
            union.insert(text.to_string());
        }
    }
    Value::from(union.into_iter().collect::<Vec<String>>())
}

fn merge_nested(key: &str, values: &[&Value]) -> Result<Value, ReportError> {
    let maps: Vec<&Map<String, Value>> = values
        .iter()
        .map(|value| {
            value.as_object().ok_or_else(|| {
                ReportError::ShapeMismatch(format!("field '{key}' is not an object in all reports"))
            })
        })
        .collect::<Result<_, _>>()?;

    let expected: BTreeSet<&String> = maps[0].keys().collect();
    for map in &maps[1..] {
        let found: BTreeSet<&String> = map.keys().collect();
        if found != expected {
            return Err(ReportError::ShapeMismatch(format!(
                "nested field '{key}' differs in keys across reports"
            )));
        }
    }

    let mut merged = Map::new();
    for sub_key in maps[0].keys() {
        let sub_values: Vec<&Value> = maps.iter().map(|map| &map[sub_key]).collect();
        merged.insert(
            sub_key.clone(),
            apply_rule(nested_rule_for(sub_key), sub_key, &sub_values)?,
        );
    }
    Ok(Value::Object(merged))
}

fn overwrite(values: &[&Value]) -> Value {
    values.last().map(|value| (*value).clone()).unwrap_or(Value::Null)
}

fn as_numbers(values: &[&Value]) -> Option<Vec<f64>> {
    values.iter().map(|value| value.as_f64()).collect()
}
