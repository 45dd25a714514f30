use readiness_core::{round2, Finding, Frame, SchemaHints};

/// Share of non-null values in the label column, if one can be resolved.
///
/// The hinted label wins; otherwise a single column whose name contains
/// `label` is accepted. Ambiguous or absent labels are not applicable.
pub fn check_label_presence(frame: &Frame, hints: &SchemaHints) -> Finding<f64> {
    let mut candidates = hints.label.resolve(frame);
    if candidates.is_empty() {
        candidates = frame
            .columns()
            .iter()
            .filter(|name| name.to_lowercase().contains("label"))
            .cloned()
            .collect();
        if candidates.len() != 1 {
            return Finding::NotApplicable;
        }
    }

    let Some(idx) = candidates.first().and_then(|name| frame.column_index(name)) else {
        return Finding::NotApplicable;
    };
    if frame.n_rows() == 0 {
        return Finding::Applicable(0.0);
    }
    let non_null = frame.column(idx).filter(|cell| !cell.is_null()).count();
    Finding::Applicable(round2(non_null as f64 / frame.n_rows() as f64 * 100.0))
}
