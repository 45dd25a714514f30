use std::collections::BTreeMap;

use readiness_core::{FileFormat, Finding, RawReport};

/// A fully-applicable raw report: every conditional check has a live
/// signal, so all 100 base points are in play.
pub fn base_report() -> RawReport {
    RawReport {
        column_missing: BTreeMap::from([("age".to_string(), 45.0)]),
        column_missing_count: 3,
        column_missing_percentage: 30.0,
        number_of_columns: 10,
        row_missing_count: 0,
        row_missing_percentage: 0.0,
        number_of_rows: 100,
        exact_row_duplicates: 0,
        exact_row_duplicates_percentage: 0.0,
        region_column: Finding::Applicable(vec!["region".to_string()]),
        region_coverage: Finding::Applicable(0.0),
        low_variance_numeric_columns: Finding::Applicable(Vec::new()),
        percentage_low_variance_numeric_columns: 0.0,
        number_of_numeric_columns: 4,
        numeric_columns: Finding::Applicable(vec![
            "age".to_string(),
            "income".to_string(),
            "height".to_string(),
            "weight".to_string(),
        ]),
        dominant_categorical_columns: Finding::Applicable(Vec::new()),
        percentage_dominant_categorical_columns: 0.0,
        number_of_categorical_columns: 2,
        categorical_columns: Finding::Applicable(vec![
            "status".to_string(),
            "district".to_string(),
        ]),
        file_format: FileFormat::Valid,
        date_column: Finding::Applicable(vec!["visit_date".to_string()]),
        number_of_date_columns: 1,
        datetime_issues_percentage: Finding::Applicable(0.0),
        timestamp_column: Finding::Applicable(vec!["created_at".to_string()]),
        number_of_timestamp_columns: 1,
        date_or_timestamp_fields_found: Finding::Applicable(vec![
            "visit_date".to_string(),
            "created_at".to_string(),
        ]),
        date_or_timestamp_issues_percentage: Finding::Applicable(0.0),
        label_presence: Finding::Applicable(100.0),
        documentation_found: true,
    }
}
