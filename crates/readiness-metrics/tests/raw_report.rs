use readiness_core::{Cell, Finding, Frame, SchemaHints};
use readiness_metrics::build_raw_report_in_memory;

fn sample_frame() -> Frame {
    Frame::new(
        "households",
        vec![
            "region".to_string(),
            "income".to_string(),
            "created_at".to_string(),
        ],
        vec![
            vec![
                Cell::Text("north".to_string()),
                Cell::Int(1200),
                Cell::Text("2024-01-01 08:00:00".to_string()),
            ],
            vec![
                Cell::Text("south".to_string()),
                Cell::Int(3400),
                Cell::Text("2024-01-02 08:00:00".to_string()),
            ],
            vec![
                Cell::Null,
                Cell::Null,
                Cell::Text("2024-01-03 08:00:00".to_string()),
            ],
        ],
    )
    .unwrap()
}

#[test]
fn builds_a_complete_report_for_a_plain_frame() {
    let report = build_raw_report_in_memory(&sample_frame(), &SchemaHints::default());

    assert_eq!(report.number_of_columns, 3);
    assert_eq!(report.number_of_rows, 3);
    // region and income are each 33.33% missing, above the 30% threshold
    assert_eq!(report.column_missing_count, 2);
    assert!(report.region_coverage.is_applicable());
    assert_eq!(
        report.region_column,
        Finding::Applicable(vec!["region".to_string()])
    );
    assert_eq!(
        report.date_or_timestamp_fields_found,
        Finding::Applicable(vec!["created_at".to_string()])
    );
    assert_eq!(
        report.date_or_timestamp_issues_percentage,
        Finding::Applicable(0.0)
    );
    assert!(!report.documentation_found);
}

#[test]
fn serialized_key_set_is_stable_across_units() {
    let hints = SchemaHints::default();
    let with_roles = build_raw_report_in_memory(&sample_frame(), &hints);
    let bare = build_raw_report_in_memory(
        &Frame::new("empty", vec!["value".to_string()], Vec::new()).unwrap(),
        &hints,
    );

    let keys = |report: &readiness_core::RawReport| -> Vec<String> {
        let value = serde_json::to_value(report).unwrap();
        value
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    };
    assert_eq!(keys(&with_roles), keys(&bare));
}

#[test]
fn inapplicable_checks_serialize_the_sentinel() {
    let frame = Frame::new("empty", vec!["value".to_string()], Vec::new()).unwrap();
    let report = build_raw_report_in_memory(&frame, &SchemaHints::default());
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["region_coverage"], serde_json::json!("None"));
    assert_eq!(value["low_variance_numeric_columns"], serde_json::json!("None"));
    assert_eq!(value["datetime_issues_percentage"], serde_json::json!("None"));
}

#[test]
fn degenerate_frames_produce_neutral_findings() {
    let frame = Frame::new("empty", Vec::new(), Vec::new()).unwrap();
    let report = build_raw_report_in_memory(&frame, &SchemaHints::default());

    assert_eq!(report.number_of_columns, 0);
    assert_eq!(report.column_missing_count, 0);
    assert_eq!(report.column_missing_percentage, 0.0);
    assert_eq!(report.row_missing_count, 0);
    assert_eq!(report.exact_row_duplicates, 0);
    assert_eq!(report.region_coverage, Finding::NotApplicable);
}
