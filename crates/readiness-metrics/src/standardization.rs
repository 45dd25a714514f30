use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use readiness_core::{round2, FileFormat, Finding, Frame, SchemaHints};

/// Extensions accepted as standard machine-readable formats.
pub const VALID_FORMATS: [&str; 3] = ["csv", "json", "parquet"];

/// Default parse format for hinted date columns without an explicit one.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Check the dataset file extension against the format whitelist.
pub fn check_file_format(path: &Path) -> FileFormat {
    let valid = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            VALID_FORMATS.iter().any(|valid| *valid == ext)
        })
        .unwrap_or(false);
    if valid {
        FileFormat::Valid
    } else {
        FileFormat::Invalid
    }
}

/// Date-format uniformity findings.
#[derive(Debug, Clone)]
pub struct DateFormatCheck {
    pub date_columns: Finding<Vec<String>>,
    pub number_of_date_columns: u64,
    /// Percentage of non-null values failing to parse under the hinted
    /// format.
    pub issues_percentage: Finding<f64>,
}

/// Parse every non-null value of the hinted date columns under the hinted
/// format and report the failure share. Not applicable without a hinted
/// date column present in the frame.
pub fn check_date_format(frame: &Frame, hints: &SchemaHints) -> DateFormatCheck {
    let columns = hints.date_columns(frame);
    if columns.is_empty() {
        return DateFormatCheck {
            date_columns: Finding::NotApplicable,
            number_of_date_columns: 0,
            issues_percentage: Finding::NotApplicable,
        };
    }

    let format = hints.date_format().unwrap_or(DEFAULT_DATE_FORMAT);
    let issues = parse_issue_percentage(frame, &columns, format);
    DateFormatCheck {
        number_of_date_columns: columns.len() as u64,
        date_columns: Finding::Applicable(columns),
        issues_percentage: Finding::Applicable(issues),
    }
}

/// Percentage of non-null values across `columns` that fail to parse
/// under `format`. 0.0 when there are no values to check.
pub(crate) fn parse_issue_percentage(frame: &Frame, columns: &[String], format: &str) -> f64 {
    let mut total = 0u64;
    let mut failures = 0u64;
    for name in columns {
        let Some(idx) = frame.column_index(name) else {
            continue;
        };
        for cell in frame.column(idx) {
            let Some(text) = cell.as_text() else {
                continue;
            };
            total += 1;
            if !parses_with_format(text.trim(), format) {
                failures += 1;
            }
        }
    }
    if total == 0 {
        0.0
    } else {
        round2(failures as f64 / total as f64 * 100.0)
    }
}

/// A format with a time component parses as a datetime, otherwise as a
/// bare date.
pub(crate) fn parses_with_format(value: &str, format: &str) -> bool {
    let has_time = ["%H", "%M", "%S", "%T", "%:z", "%z"]
        .iter()
        .any(|spec| format.contains(spec));
    if has_time {
        NaiveDateTime::parse_from_str(value, format).is_ok()
    } else {
        NaiveDate::parse_from_str(value, format).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_core::{Cell, ColumnHint, DatetimeHint};

    #[test]
    fn accepts_whitelisted_extensions() {
        assert_eq!(check_file_format(Path::new("data.CSV")), FileFormat::Valid);
        assert_eq!(check_file_format(Path::new("data.xls")), FileFormat::Invalid);
        assert_eq!(check_file_format(Path::new("data")), FileFormat::Invalid);
    }

    #[test]
    fn counts_parse_failures() {
        let frame = Frame::new(
            "unit",
            vec!["day".to_string()],
            vec![
                vec![Cell::Text("2024-01-01".to_string())],
                vec![Cell::Text("01/02/2024".to_string())],
                vec![Cell::Null],
            ],
        )
        .unwrap();
        let hints = SchemaHints {
            date: Some(DatetimeHint {
                column: ColumnHint::One("day".to_string()),
                format: None,
            }),
            ..SchemaHints::default()
        };
        let result = check_date_format(&frame, &hints);
        assert_eq!(result.issues_percentage, Finding::Applicable(50.0));
        assert_eq!(result.number_of_date_columns, 1);
    }

    #[test]
    fn no_hinted_date_column_is_not_applicable() {
        let frame = Frame::new("unit", vec!["value".to_string()], Vec::new()).unwrap();
        let result = check_date_format(&frame, &SchemaHints::default());
        assert_eq!(result.issues_percentage, Finding::NotApplicable);
    }
}
