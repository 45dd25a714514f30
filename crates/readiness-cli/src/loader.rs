use std::path::Path;

use readiness_core::{Cell, Frame};

use crate::CliError;

/// Load a CSV file into a frame, sniffing each cell as null, integer,
/// float, boolean, or text. There is no schema here, so the cell type is
/// decided per value.
pub(crate) fn load_csv_frame(path: &Path) -> Result<Frame, CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader
        .headers()?
        .iter()
        .map(|header| header.to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(parse_cell(record.get(idx).unwrap_or_default()));
        }
        rows.push(row);
    }

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("dataset")
        .to_string();
    Ok(Frame::new(name, headers, rows)?)
}

fn parse_cell(value: &str) -> Cell {
    let trimmed = value.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("nan")
    {
        return Cell::Null;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Cell::Int(value);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return Cell::Float(value);
    }
    match trimmed.to_lowercase().as_str() {
        "true" | "t" => Cell::Bool(true),
        "false" | "f" => Cell::Bool(false),
        _ => Cell::Text(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_cell_types() {
        assert_eq!(parse_cell("42"), Cell::Int(42));
        assert_eq!(parse_cell("3.5"), Cell::Float(3.5));
        assert_eq!(parse_cell("true"), Cell::Bool(true));
        assert_eq!(parse_cell("north"), Cell::Text("north".to_string()));
    }

    #[test]
    fn empty_and_na_are_null() {
        assert_eq!(parse_cell(""), Cell::Null);
        assert_eq!(parse_cell("  "), Cell::Null);
        assert_eq!(parse_cell("NULL"), Cell::Null);
        assert_eq!(parse_cell("NaN"), Cell::Null);
    }
}
