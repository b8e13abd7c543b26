#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

/// A single cell as it moves through the pipeline.
///
/// Ingest only produces `Text` and `Missing`; the normalizer upgrades cells to
/// the typed variants its field rules recognize.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    Missing,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Bool(bool),
}

impl CellValue {
    /// Builds a text cell, mapping blank input to `Missing`.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(value)
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Missing => "missing",
            CellValue::Text(_) => "string",
            CellValue::Number(_) => "number",
            CellValue::Date(_) => "date",
            CellValue::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Missing => Ok(()),
            CellValue::Text(value) => f.write_str(value),
            CellValue::Number(value) => write!(f, "{value}"),
            CellValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            CellValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// One source row keyed by canonical field name.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    /// Zero-based data row position in the source table.
    pub index: usize,
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            cells: BTreeMap::new(),
        }
    }

    /// Builds a row from `(field, cell)` pairs; handy for fixtures.
    pub fn from_pairs<K, V, I>(index: usize, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<CellValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            index,
            cells: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.cells.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: CellValue) {
        self.cells.insert(field.into(), value);
    }

    /// Returns the first non-missing text among `fields`, used to label rows in reports.
    pub fn label(&self, fields: &[&str]) -> Option<String> {
        fields
            .iter()
            .filter_map(|field| self.cells.get(*field))
            .find(|cell| !cell.is_missing())
            .map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_becomes_missing() {
        assert_eq!(CellValue::text("   "), CellValue::Missing);
        assert_eq!(CellValue::text(""), CellValue::Missing);
        assert_eq!(CellValue::text("x"), CellValue::Text("x".to_string()));
    }

    #[test]
    fn display_formats_dates_as_iso() {
        let cell = CellValue::Date(NaiveDate::from_ymd_opt(2021, 6, 1).unwrap());
        assert_eq!(cell.to_string(), "2021-06-01");
    }

    #[test]
    fn label_skips_missing_cells() {
        let row = Row::from_pairs(0, [("manufacturer", ""), ("name", "Destroyer")]);
        assert_eq!(
            row.label(&["manufacturer", "name"]),
            Some("Destroyer".to_string())
        );
    }
}
