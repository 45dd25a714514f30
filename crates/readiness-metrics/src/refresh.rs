use readiness_core::{Finding, Frame, SchemaHints};

use crate::standardization::{parse_issue_percentage, DEFAULT_DATE_FORMAT};

/// Columns assumed to carry refresh timestamps when no hint names one.
pub const DEFAULT_TIMESTAMP_COLUMNS: [&str; 2] = ["created_at", "updated_at"];

/// Default parse format for hinted timestamp columns without an explicit
/// one.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Regular-refresh findings.
#[derive(Debug, Clone)]
pub struct TimestampFields {
    pub timestamp_columns: Finding<Vec<String>>,
    pub number_of_timestamp_columns: u64,
    /// Union of present date and timestamp columns.
    pub fields_found: Finding<Vec<String>>,
    /// Percentage of values across the union failing to parse.
    pub issues_percentage: Finding<f64>,
}

/// Resolve timestamp columns from the hints (common-name fallback), union
/// them with the hinted date columns, and measure how cleanly the union
/// parses. Not applicable when the union is empty.
pub fn check_timestamp_fields(frame: &Frame, hints: &SchemaHints) -> TimestampFields {
    let mut timestamp_columns = hints.timestamp_columns(frame);
    if timestamp_columns.is_empty() {
        timestamp_columns = DEFAULT_TIMESTAMP_COLUMNS
            .iter()
            .filter(|name| frame.has_column(name))
            .map(|name| name.to_string())
            .collect();
    }
    let date_columns = hints.date_columns(frame);

    let mut fields_found = date_columns.clone();
    for name in &timestamp_columns {
        if !fields_found.contains(name) {
            fields_found.push(name.clone());
        }
    }

    if fields_found.is_empty() {
        return TimestampFields {
            timestamp_columns: Finding::NotApplicable,
            number_of_timestamp_columns: 0,
            fields_found: Finding::NotApplicable,
            issues_percentage: Finding::NotApplicable,
        };
    }

    let date_format = hints.date_format().unwrap_or(DEFAULT_DATE_FORMAT);
    let timestamp_format = hints.timestamp_format().unwrap_or(DEFAULT_TIMESTAMP_FORMAT);

    // Date and timestamp columns parse under their own formats; weight the
    // combined percentage by the value counts of each group.
    let date_issues = parse_issue_percentage(frame, &date_columns, date_format);
    let timestamp_only: Vec<String> = timestamp_columns
        .iter()
        .filter(|name| !date_columns.contains(name))
        .cloned()
        .collect();
    let timestamp_issues = parse_issue_percentage(frame, &timestamp_only, timestamp_format);

    let date_values = value_count(frame, &date_columns);
    let timestamp_values = value_count(frame, &timestamp_only);
    let total = date_values + timestamp_values;
    let issues = if total == 0 {
        0.0
    } else {
        readiness_core::round2(
            (date_issues * date_values as f64 + timestamp_issues * timestamp_values as f64)
                / total as f64,
        )
    };

    TimestampFields {
        number_of_timestamp_columns: timestamp_columns.len() as u64,
        timestamp_columns: if timestamp_columns.is_empty() {
            Finding::NotApplicable
        } else {
            Finding::Applicable(timestamp_columns)
        },
        fields_found: Finding::Applicable(fields_found),
        issues_percentage: Finding::Applicable(issues),
    }
}

fn value_count(frame: &Frame, columns: &[String]) -> u64 {
    columns
        .iter()
        .filter_map(|name| frame.column_index(name))
        .map(|idx| frame.column(idx).filter(|cell| !cell.is_null()).count() as u64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_core::Cell;

    #[test]
    fn falls_back_to_common_timestamp_names() {
        let frame = Frame::new(
            "unit",
            vec!["created_at".to_string()],
            vec![
                vec![Cell::Text("2024-01-01 10:00:00".to_string())],
                vec![Cell::Text("not a time".to_string())],
            ],
        )
        .unwrap();
        let result = check_timestamp_fields(&frame, &SchemaHints::default());
        assert_eq!(
            result.fields_found,
            Finding::Applicable(vec!["created_at".to_string()])
        );
        assert_eq!(result.issues_percentage, Finding::Applicable(50.0));
        assert_eq!(result.number_of_timestamp_columns, 1);
    }

    #[test]
    fn empty_union_is_not_applicable() {
        let frame = Frame::new("unit", vec!["value".to_string()], Vec::new()).unwrap();
        let result = check_timestamp_fields(&frame, &SchemaHints::default());
        assert_eq!(result.fields_found, Finding::NotApplicable);
        assert_eq!(result.issues_percentage, Finding::NotApplicable);
    }
}
