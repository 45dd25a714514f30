use readiness_core::{round2, Finding, Frame, SchemaHints};

/// Region coverage findings.
#[derive(Debug, Clone)]
pub struct RegionCoverage {
    pub region_column: Finding<Vec<String>>,
    /// Percentage of missing values in the first region column.
    pub region_coverage: Finding<f64>,
}

/// Resolve region-like columns from the hints, falling back to a name
/// substring match, and measure how well the first one is filled.
pub fn check_region_coverage(frame: &Frame, hints: &SchemaHints) -> RegionCoverage {
    let mut columns = hints.region.resolve(frame);
    if columns.is_empty() {
        columns = frame
            .columns()
            .iter()
            .filter(|name| name.to_lowercase().contains("region"))
            .cloned()
            .collect();
    }

    let Some(first) = columns.first() else {
        return RegionCoverage {
            region_column: Finding::NotApplicable,
            region_coverage: Finding::NotApplicable,
        };
    };

    // column names in `columns` came from the frame, so the lookup holds
    let missing = frame
        .column_index(first)
        .map(|idx| frame.missing_percentage(idx))
        .unwrap_or(0.0);

    RegionCoverage {
        region_column: Finding::Applicable(columns),
        region_coverage: Finding::Applicable(round2(missing)),
    }
}
