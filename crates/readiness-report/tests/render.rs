mod common;

use common::base_report;
use readiness_core::Finding;
use readiness_report::{compute_aggregate_score, display_buckets, render_final_report};

#[test]
fn buckets_keep_fixed_order_and_positional_ids() {
    let raw = base_report();
    let score = compute_aggregate_score(&raw);
    let report = render_final_report(&raw, &score);

    let names: Vec<&str> = report.iter().map(|bucket| bucket.bucket.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Data Quality",
            "Data Relevance and Completeness",
            "Variance and Correctness",
            "Standardisation",
            "Regular Refresh",
            "Documentation",
        ]
    );

    let ids: Vec<&str> = report[0].tests.iter().map(|test| test.id.as_str()).collect();
    assert_eq!(ids, vec!["1.1", "1.2", "1.3"]);
    assert_eq!(report[3].tests[1].id, "4.2");
}

#[test]
fn bucket_weight_is_the_sum_of_member_max_scores() {
    let raw = base_report();
    let score = compute_aggregate_score(&raw);
    let report = render_final_report(&raw, &score);

    assert_eq!(report[0].weight, 35.0);
    assert_eq!(report[2].weight, 10.0);
    let total: f64 = report.iter().map(|bucket| bucket.weight).sum();
    assert_eq!(total, score.total_weights);
}

#[test]
fn inapplicable_bucket_is_emitted_with_zero_weight() {
    let mut raw = base_report();
    raw.region_column = Finding::NotApplicable;
    raw.region_coverage = Finding::NotApplicable;
    let score = compute_aggregate_score(&raw);
    let report = render_final_report(&raw, &score);

    let coverage = &report[1];
    assert_eq!(coverage.weight, 0.0);
    assert_eq!(coverage.tests[0].max_score, 0.0);
    assert_eq!(coverage.tests[0].score, 0.0);

    // the canonical report keeps the bucket, the display filter drops it
    assert_eq!(report.len(), 6);
    let displayed = display_buckets(&report);
    assert_eq!(displayed.len(), 5);
    assert!(displayed.iter().all(|bucket| bucket.weight > 0.0));
}

#[test]
fn notes_are_derived_from_raw_metrics() {
    let raw = base_report();
    let score = compute_aggregate_score(&raw);
    let report = render_final_report(&raw, &score);

    assert_eq!(
        report[0].tests[0].note,
        "7 out of 10 columns have at least 70% of their data filled."
    );
    assert_eq!(
        report[0].tests[1].note,
        "100% of rows have at least 50% of their fields filled."
    );
    assert_eq!(
        report[3].tests[1].note,
        "100% of date values parse under the hinted format."
    );
    assert_eq!(
        report[5].tests[0].note,
        "Documentation includes comprehensive data dictionary files."
    );
}

#[test]
fn test_scores_mirror_detailed_scores() {
    let raw = base_report();
    let score = compute_aggregate_score(&raw);
    let report = render_final_report(&raw, &score);

    for bucket in &report {
        for test in &bucket.tests {
            assert_eq!(test.score, score.detailed_scores[&test.key]);
        }
    }
}
