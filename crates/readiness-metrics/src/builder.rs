use std::path::Path;

use readiness_core::{FileFormat, Frame, RawReport, Result, SchemaHints};
use tracing::debug;

use crate::{coverage, documentation, ingestion, quality, refresh, standardization, variance};

/// Run the full fixed evaluator battery over one dataset unit and project
/// the typed records into the flat raw-report shape.
///
/// Every evaluator always runs; each one signals its own applicability
/// through its return value, and the scoring engine reuses exactly that
/// signal. The documentation check lists the directory containing
/// `data_path`; everything else is a pure function of the frame and hints.
pub fn build_raw_report(frame: &Frame, hints: &SchemaHints, data_path: &Path) -> Result<RawReport> {
    debug!(unit = frame.name(), "building raw readiness report");

    let mut report = build_raw_report_in_memory(frame, hints);
    report.file_format = standardization::check_file_format(data_path);
    report.documentation_found = documentation::check_documentation_presence(
        data_path.parent().unwrap_or(Path::new(".")),
    )?;
    Ok(report)
}

/// Raw report for a frame with no backing file: the filesystem-facing
/// checks default to a valid format and absent documentation. Used by
/// tests and by callers that already hold a frame.
pub fn build_raw_report_in_memory(frame: &Frame, hints: &SchemaHints) -> RawReport {
    let column_missing = quality::check_column_missing(frame);
    let row_missing = quality::check_row_missing(frame);
    let duplicates = quality::check_row_duplicates(frame);
    let region = coverage::check_region_coverage(frame, hints);
    let numeric = variance::check_numeric_variance(frame);
    let categorical = variance::check_categorical_variation(frame, hints);
    let date_format = standardization::check_date_format(frame, hints);
    let timestamps = refresh::check_timestamp_fields(frame, hints);
    let label_presence = ingestion::check_label_presence(frame, hints);

    RawReport {
        column_missing: column_missing.per_column,
        column_missing_count: column_missing.count,
        column_missing_percentage: column_missing.percentage,
        number_of_columns: column_missing.number_of_columns,
        row_missing_count: row_missing.count,
        row_missing_percentage: row_missing.percentage,
        number_of_rows: row_missing.number_of_rows,
        exact_row_duplicates: duplicates.count,
        exact_row_duplicates_percentage: duplicates.percentage,
        region_column: region.region_column,
        region_coverage: region.region_coverage,
        low_variance_numeric_columns: numeric.low_variance_columns,
        percentage_low_variance_numeric_columns: numeric.percentage,
        number_of_numeric_columns: numeric.number_of_numeric_columns,
        numeric_columns: numeric.numeric_columns,
        dominant_categorical_columns: categorical.dominant_columns,
        percentage_dominant_categorical_columns: categorical.percentage,
        number_of_categorical_columns: categorical.number_of_categorical_columns,
        categorical_columns: categorical.categorical_columns,
        file_format: FileFormat::Valid,
        date_column: date_format.date_columns,
        number_of_date_columns: date_format.number_of_date_columns,
        datetime_issues_percentage: date_format.issues_percentage,
        timestamp_column: timestamps.timestamp_columns,
        number_of_timestamp_columns: timestamps.number_of_timestamp_columns,
        date_or_timestamp_fields_found: timestamps.fields_found,
        date_or_timestamp_issues_percentage: timestamps.issues_percentage,
        label_presence,
        documentation_found: false,
    }
}
