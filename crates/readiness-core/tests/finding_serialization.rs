use readiness_core::Finding;

#[test]
fn serializes_not_applicable_as_sentinel() {
    let finding: Finding<f64> = Finding::NotApplicable;
    let json = serde_json::to_string(&finding).expect("serialize finding");
    assert_eq!(json, "\"None\"");
}

#[test]
fn serializes_applicable_value_transparently() {
    let finding = Finding::Applicable(vec!["region".to_string()]);
    let json = serde_json::to_string(&finding).expect("serialize finding");
    assert_eq!(json, "[\"region\"]");
}

#[test]
fn deserializes_sentinel_and_value_forms() {
    let finding: Finding<f64> = serde_json::from_str("\"None\"").expect("sentinel form");
    assert_eq!(finding, Finding::NotApplicable);

    let finding: Finding<f64> = serde_json::from_str("12.5").expect("value form");
    assert_eq!(finding, Finding::Applicable(12.5));
}

#[test]
fn rejects_other_strings_for_numeric_findings() {
    let result: Result<Finding<f64>, _> = serde_json::from_str("\"missing\"");
    assert!(result.is_err());
}
