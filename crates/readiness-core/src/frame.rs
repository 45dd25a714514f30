use std::collections::HashMap;

use crate::error::{Error, Result};

/// A single cell of a loaded dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Float(_))
    }

    /// Numeric view of the cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(value) => Some(*value as f64),
            Cell::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Textual view used for duplicate and dominance grouping.
    pub fn group_key(&self) -> String {
        match self {
            Cell::Null => "null".to_string(),
            Cell::Int(value) => value.to_string(),
            Cell::Float(value) => value.to_string(),
            Cell::Bool(value) => value.to_string(),
            Cell::Text(value) => value.clone(),
        }
    }

    /// Textual view of a non-null cell, as fed to the date parsers.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::Text(value) => Some(value.clone()),
            other => Some(other.group_key()),
        }
    }
}

/// One dataset unit held in memory: named columns and row-major cells.
///
/// Zero-row and zero-column frames are valid inputs everywhere; every
/// derived statistic degrades to a defined neutral value instead of
/// dividing by zero.
#[derive(Debug, Clone)]
pub struct Frame {
    name: String,
    columns: Vec<String>,
    column_lookup: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl Frame {
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::InvalidDataset(format!(
                    "row {} has {} cells, expected {}",
                    idx + 1,
                    row.len(),
                    columns.len()
                )));
            }
        }
        let column_lookup = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.to_lowercase(), idx))
            .collect();
        Ok(Self {
            name: name.into(),
            columns,
            column_lookup,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Case-insensitive column lookup.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.column_lookup.get(&column.to_lowercase()).copied()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    pub fn column(&self, idx: usize) -> impl Iterator<Item = &Cell> {
        self.rows.iter().map(move |row| &row[idx])
    }

    pub fn null_count(&self, idx: usize) -> usize {
        self.column(idx).filter(|cell| cell.is_null()).count()
    }

    /// Share of missing values in a column, in percent. 0.0 for an empty
    /// frame.
    pub fn missing_percentage(&self, idx: usize) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.null_count(idx) as f64 / self.rows.len() as f64 * 100.0
    }

    /// A column is numeric when it has at least one non-null cell and all
    /// non-null cells are numeric.
    pub fn is_numeric_column(&self, idx: usize) -> bool {
        let mut seen = false;
        for cell in self.column(idx) {
            match cell {
                Cell::Null => {}
                cell if cell.is_numeric() => seen = true,
                _ => return false,
            }
        }
        seen
    }

    /// Names of all numeric columns, in frame order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.is_numeric_column(*idx))
            .map(|(_, name)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new(
            "unit",
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec![Cell::Int(1), Cell::Text("x".to_string())],
                vec![Cell::Null, Cell::Text("y".to_string())],
            ],
        )
        .unwrap()
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = Frame::new("unit", vec!["a".to_string()], vec![vec![]]);
        assert!(result.is_err());
    }

    #[test]
    fn column_lookup_is_case_insensitive() {
        assert_eq!(frame().column_index("A"), Some(0));
        assert_eq!(frame().column_index("missing"), None);
    }

    #[test]
    fn numeric_detection_ignores_nulls() {
        let frame = frame();
        assert!(frame.is_numeric_column(0));
        assert!(!frame.is_numeric_column(1));
        assert_eq!(frame.numeric_columns(), vec!["a".to_string()]);
    }

    #[test]
    fn missing_percentage_on_empty_frame_is_zero() {
        let frame = Frame::new("unit", vec!["a".to_string()], Vec::new()).unwrap();
        assert_eq!(frame.missing_percentage(0), 0.0);
    }
}
