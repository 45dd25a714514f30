use readiness_core::{round2, Finding, Frame, SchemaHints};

/// Columns whose coefficient of variation falls below this value carry
/// almost no information.
pub const CV_THRESHOLD: f64 = 0.1;

/// Share above which one category value dominates a categorical column.
pub const DOMINANCE_THRESHOLD: f64 = 0.80;

/// Numeric variance findings.
#[derive(Debug, Clone)]
pub struct NumericVariance {
    pub low_variance_columns: Finding<Vec<String>>,
    pub percentage: f64,
    pub number_of_numeric_columns: u64,
    pub numeric_columns: Finding<Vec<String>>,
}

/// Numeric columns with a coefficient of variation below [`CV_THRESHOLD`].
/// Columns with a zero mean or fewer than two values are skipped.
pub fn check_numeric_variance(frame: &Frame) -> NumericVariance {
    let numeric = frame.numeric_columns();
    if numeric.is_empty() {
        return NumericVariance {
            low_variance_columns: Finding::NotApplicable,
            percentage: 0.0,
            number_of_numeric_columns: 0,
            numeric_columns: Finding::NotApplicable,
        };
    }

    let mut low_variance = Vec::new();
    for name in &numeric {
        let Some(idx) = frame.column_index(name) else {
            continue;
        };
        let values: Vec<f64> = frame.column(idx).filter_map(|cell| cell.as_f64()).collect();
        if values.len() < 2 {
            continue;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        if mean == 0.0 {
            continue;
        }
        if sample_std(&values, mean) / mean < CV_THRESHOLD {
            low_variance.push(name.clone());
        }
    }

    let percentage = round2(low_variance.len() as f64 / numeric.len() as f64 * 100.0);
    NumericVariance {
        low_variance_columns: Finding::Applicable(low_variance),
        percentage,
        number_of_numeric_columns: numeric.len() as u64,
        numeric_columns: Finding::Applicable(numeric),
    }
}

fn sample_std(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Categorical variation findings.
#[derive(Debug, Clone)]
pub struct CategoricalVariation {
    pub dominant_columns: Finding<Vec<String>>,
    pub percentage: f64,
    pub number_of_categorical_columns: u64,
    pub categorical_columns: Finding<Vec<String>>,
}

/// Hinted categorical columns where one value holds more than
/// [`DOMINANCE_THRESHOLD`] of the non-null cells.
pub fn check_categorical_variation(frame: &Frame, hints: &SchemaHints) -> CategoricalVariation {
    let categorical = hints.categorical_columns(frame);
    if categorical.is_empty() {
        return CategoricalVariation {
            dominant_columns: Finding::NotApplicable,
            percentage: 0.0,
            number_of_categorical_columns: 0,
            categorical_columns: Finding::NotApplicable,
        };
    }

    let mut dominant = Vec::new();
    for name in &categorical {
        let Some(idx) = frame.column_index(name) else {
            continue;
        };
        if let Some(share) = dominant_share(frame, idx) {
            if share > DOMINANCE_THRESHOLD {
                dominant.push(name.clone());
            }
        }
    }

    let percentage = round2(dominant.len() as f64 / categorical.len() as f64 * 100.0);
    CategoricalVariation {
        dominant_columns: Finding::Applicable(dominant),
        percentage,
        number_of_categorical_columns: categorical.len() as u64,
        categorical_columns: Finding::Applicable(categorical),
    }
}

/// Share of the most frequent non-null value, if any non-null cell exists.
fn dominant_share(frame: &Frame, idx: usize) -> Option<f64> {
    let mut counts = std::collections::HashMap::new();
    let mut total = 0u64;
    for cell in frame.column(idx) {
        if cell.is_null() {
            continue;
        }
        *counts.entry(cell.group_key()).or_insert(0u64) += 1;
        total += 1;
    }
    if total == 0 {
        return None;
    }
    counts
        .values()
        .max()
        .map(|max| *max as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_core::Cell;

    #[test]
    fn flags_near_constant_numeric_columns() {
        let frame = Frame::new(
            "unit",
            vec!["flat".to_string(), "spread".to_string()],
            vec![
                vec![Cell::Float(100.0), Cell::Float(1.0)],
                vec![Cell::Float(100.1), Cell::Float(50.0)],
                vec![Cell::Float(99.9), Cell::Float(200.0)],
            ],
        )
        .unwrap();
        let result = check_numeric_variance(&frame);
        assert_eq!(
            result.low_variance_columns,
            Finding::Applicable(vec!["flat".to_string()])
        );
        assert_eq!(result.percentage, 50.0);
        assert_eq!(result.number_of_numeric_columns, 2);
    }

    #[test]
    fn no_numeric_columns_is_not_applicable() {
        let frame = Frame::new(
            "unit",
            vec!["name".to_string()],
            vec![vec![Cell::Text("a".to_string())]],
        )
        .unwrap();
        let result = check_numeric_variance(&frame);
        assert_eq!(result.low_variance_columns, Finding::NotApplicable);
        assert_eq!(result.number_of_numeric_columns, 0);
    }

    #[test]
    fn detects_dominant_category() {
        let frame = Frame::new(
            "unit",
            vec!["status".to_string()],
            (0..10)
                .map(|i| {
                    vec![Cell::Text(if i < 9 { "open" } else { "closed" }.to_string())]
                })
                .collect(),
        )
        .unwrap();
        let hints = SchemaHints {
            categorical: vec!["status".to_string()],
            ..SchemaHints::default()
        };
        let result = check_categorical_variation(&frame, &hints);
        assert_eq!(
            result.dominant_columns,
            Finding::Applicable(vec!["status".to_string()])
        );
        assert_eq!(result.percentage, 100.0);
    }
}
