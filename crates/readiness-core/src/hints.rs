use serde::Deserialize;

use crate::frame::Frame;

/// Column-role hints produced by the external role classifier.
///
/// The classifier output is untrusted: any sub-key may be absent, null,
/// a single column name, or a list of names. A missing or unparsable
/// hints document degrades to `SchemaHints::default()` and every check
/// that depends on a role simply reports itself as not applicable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SchemaHints {
    pub region: ColumnHint,
    pub date: Option<DatetimeHint>,
    pub timestamp: Option<DatetimeHint>,
    pub label: ColumnHint,
    pub categorical: Vec<String>,
}

/// A role hint naming zero, one, or several columns.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ColumnHint {
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

impl ColumnHint {
    /// Hinted columns that actually exist in the frame.
    pub fn resolve(&self, frame: &Frame) -> Vec<String> {
        let names: Vec<&String> = match self {
            ColumnHint::None => Vec::new(),
            ColumnHint::One(name) => vec![name],
            ColumnHint::Many(names) => names.iter().collect(),
        };
        names
            .into_iter()
            .filter(|name| frame.has_column(name))
            .cloned()
            .collect()
    }
}

/// A date or timestamp role hint with its strptime-style format.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatetimeHint {
    pub column: ColumnHint,
    pub format: Option<String>,
}

impl SchemaHints {
    pub fn date_columns(&self, frame: &Frame) -> Vec<String> {
        self.date
            .as_ref()
            .map(|hint| hint.column.resolve(frame))
            .unwrap_or_default()
    }

    pub fn timestamp_columns(&self, frame: &Frame) -> Vec<String> {
        self.timestamp
            .as_ref()
            .map(|hint| hint.column.resolve(frame))
            .unwrap_or_default()
    }

    pub fn date_format(&self) -> Option<&str> {
        self.date.as_ref().and_then(|hint| hint.format.as_deref())
    }

    pub fn timestamp_format(&self) -> Option<&str> {
        self.timestamp
            .as_ref()
            .and_then(|hint| hint.format.as_deref())
    }

    pub fn categorical_columns(&self, frame: &Frame) -> Vec<String> {
        self.categorical
            .iter()
            .filter(|name| frame.has_column(name))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Cell;

    fn frame() -> Frame {
        Frame::new(
            "unit",
            vec!["region".to_string(), "date".to_string()],
            vec![vec![Cell::Text("north".to_string()), Cell::Null]],
        )
        .unwrap()
    }

    #[test]
    fn tolerates_partial_documents() {
        let hints: SchemaHints = serde_json::from_str(r#"{"region": "region"}"#).unwrap();
        assert_eq!(hints.region, ColumnHint::One("region".to_string()));
        assert!(hints.date.is_none());
    }

    #[test]
    fn tolerates_null_roles() {
        let hints: SchemaHints =
            serde_json::from_str(r#"{"region": null, "date": {"column": null, "format": null}}"#)
                .unwrap();
        assert_eq!(hints.region, ColumnHint::None);
        assert!(hints.date_columns(&frame()).is_empty());
    }

    #[test]
    fn resolve_drops_absent_columns() {
        let hint = ColumnHint::Many(vec!["region".to_string(), "ghost".to_string()]);
        assert_eq!(hint.resolve(&frame()), vec!["region".to_string()]);
    }
}
