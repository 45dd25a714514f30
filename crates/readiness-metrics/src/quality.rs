use std::collections::{BTreeMap, HashSet};

use readiness_core::{round2, Frame};

/// A column counts against the missingness check above this share of
/// missing values, in percent.
pub const COLUMN_MISSING_THRESHOLD: f64 = 30.0;

/// A row counts against the missingness check above this share of missing
/// fields, in percent.
pub const ROW_MISSING_THRESHOLD: f64 = 50.0;

/// Column-wise missingness findings.
#[derive(Debug, Clone)]
pub struct ColumnMissing {
    /// Missing percentage per offending column.
    pub per_column: BTreeMap<String, f64>,
    pub count: u64,
    pub percentage: f64,
    pub number_of_columns: u64,
}

/// Columns whose missing share exceeds [`COLUMN_MISSING_THRESHOLD`].
pub fn check_column_missing(frame: &Frame) -> ColumnMissing {
    let mut per_column = BTreeMap::new();
    for (idx, name) in frame.columns().iter().enumerate() {
        let missing = frame.missing_percentage(idx);
        if missing > COLUMN_MISSING_THRESHOLD {
            per_column.insert(name.clone(), round2(missing));
        }
    }
    let count = per_column.len() as u64;
    let percentage = if frame.n_cols() == 0 {
        0.0
    } else {
        round2(count as f64 / frame.n_cols() as f64 * 100.0)
    };
    ColumnMissing {
        per_column,
        count,
        percentage,
        number_of_columns: frame.n_cols() as u64,
    }
}

/// Row-wise missingness findings.
#[derive(Debug, Clone)]
pub struct RowMissing {
    pub count: u64,
    pub percentage: f64,
    pub number_of_rows: u64,
}

/// Rows whose missing share exceeds [`ROW_MISSING_THRESHOLD`].
pub fn check_row_missing(frame: &Frame) -> RowMissing {
    let n_cols = frame.n_cols();
    let count = if n_cols == 0 {
        0
    } else {
        frame
            .rows()
            .iter()
            .filter(|row| {
                let nulls = row.iter().filter(|cell| cell.is_null()).count();
                nulls as f64 / n_cols as f64 * 100.0 > ROW_MISSING_THRESHOLD
            })
            .count() as u64
    };
    let percentage = if frame.n_rows() == 0 {
        0.0
    } else {
        round2(count as f64 / frame.n_rows() as f64 * 100.0)
    };
    RowMissing {
        count,
        percentage,
        number_of_rows: frame.n_rows() as u64,
    }
}

/// Exact-duplicate findings.
#[derive(Debug, Clone)]
pub struct RowDuplicates {
    pub count: u64,
    pub percentage: f64,
}

/// Exact duplicate rows, first occurrence kept.
pub fn check_row_duplicates(frame: &Frame) -> RowDuplicates {
    let mut seen = HashSet::new();
    let mut count = 0u64;
    for row in frame.rows() {
        let key = row
            .iter()
            .map(|cell| escape_key_component(&cell.group_key()))
            .collect::<Vec<_>>()
            .join("|");
        if !seen.insert(key) {
            count += 1;
        }
    }
    let percentage = if frame.n_rows() == 0 {
        0.0
    } else {
        round2(count as f64 / frame.n_rows() as f64 * 100.0)
    };
    RowDuplicates { count, percentage }
}

fn escape_key_component(value: &str) -> String {
    value.replace('\\', "\\\\").replace('|', "\\|")
}
