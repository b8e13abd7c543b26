//! Record schema declarations and the field reader used to construct records.
//!
//! A schema is a static field table plus a construction function. The field
//! table drives normalization (which cells are numeric, which column holds the
//! company name, ...) while construction is the single place that decides
//! whether a row is acceptable.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{FieldError, RecordError};
use crate::table::{CellValue, Row};

/// Keys that may appear in superset inputs and are never part of a record.
pub const UNRELATED_KEYS: &[&str] = &["scores"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Disc,
    Company,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Disc => "disc",
            RecordKind::Company => "company",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Bool,
    Url,
}

/// Field-specific cleanup applied by the normalizer on top of the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Plain,
    /// Exact-match company name substitution.
    CompanyName,
    /// Free-text "active"/"inactive" status.
    Status,
    /// Website canonicalization and social-media detection.
    Website,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub rule: FieldRule,
}

impl FieldSpec {
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            rule: FieldRule::Plain,
        }
    }

    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            rule: FieldRule::Plain,
        }
    }

    pub const fn with_rule(mut self, rule: FieldRule) -> Self {
        self.rule = rule;
        self
    }
}

/// A record kind that can be constructed from a normalized row.
pub trait RecordSchema: Sized {
    const KIND: RecordKind;

    /// Field table in canonical order.
    const FIELDS: &'static [FieldSpec];

    /// Fields used to label a row in diagnostics, most specific first.
    const LABEL_FIELDS: &'static [&'static str];

    /// Reads every field through `reader`; errors are collected by the reader.
    fn read(reader: &mut FieldReader<'_>) -> Self;

    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|spec| spec.name == name)
    }

    /// Constructs a record, reporting every failing field at once.
    fn construct(row: &Row) -> Result<Self, RecordError> {
        let mut cells = row.cells.clone();
        strip_unrelated_keys(&mut cells);
        let mut reader = FieldReader::new(&cells);
        let record = Self::read(&mut reader);
        reader.finish(Self::KIND, record)
    }
}

/// Pre-construction hook: drops keys that belong to other payloads.
pub fn strip_unrelated_keys(cells: &mut BTreeMap<String, CellValue>) {
    for key in UNRELATED_KEYS {
        cells.remove(*key);
    }
}

/// Typed accessors over a row's cells.
///
/// Accessors never fail; they record a [`FieldError`] and return a placeholder
/// so that every field of a row is checked in one pass.
pub struct FieldReader<'a> {
    cells: &'a BTreeMap<String, CellValue>,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub fn new(cells: &'a BTreeMap<String, CellValue>) -> Self {
        Self {
            cells,
            errors: Vec::new(),
        }
    }

    pub fn finish<T>(self, kind: RecordKind, record: T) -> Result<T, RecordError> {
        if self.errors.is_empty() {
            Ok(record)
        } else {
            Err(RecordError::new(kind, self.errors))
        }
    }

    fn cell(&self, field: &str) -> Option<&'a CellValue> {
        self.cells.get(field).filter(|cell| !cell.is_missing())
    }

    fn wrong_type(&mut self, field: &'static str, expected: &'static str, cell: &CellValue) {
        self.errors.push(FieldError::WrongType {
            field,
            expected,
            found: cell.type_name(),
        });
    }

    pub fn required_text(&mut self, field: &'static str) -> String {
        match self.cell(field) {
            None => {
                self.errors.push(FieldError::Missing { field });
                String::new()
            }
            Some(_) => self.text(field).unwrap_or_default(),
        }
    }

    pub fn text(&mut self, field: &'static str) -> Option<String> {
        let cell = self.cell(field)?;
        match cell {
            CellValue::Text(value) => Some(value.clone()),
            other => {
                self.wrong_type(field, "string", other);
                None
            }
        }
    }

    pub fn number(&mut self, field: &'static str) -> Option<f64> {
        let cell = self.cell(field)?;
        match cell {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(value) => match parse_number(value) {
                Some(number) => Some(number),
                None => {
                    self.errors.push(FieldError::InvalidNumber {
                        field,
                        value: value.clone(),
                    });
                    None
                }
            },
            other => {
                self.wrong_type(field, "number", other);
                None
            }
        }
    }

    /// Reads a number, falling back to `default` when the cell is absent or missing.
    pub fn number_or(&mut self, field: &'static str, default: f64) -> f64 {
        if self.cell(field).is_none() {
            return default;
        }
        self.number(field).unwrap_or(default)
    }

    pub fn date(&mut self, field: &'static str) -> Option<NaiveDate> {
        let cell = self.cell(field)?;
        match cell {
            CellValue::Date(value) => Some(*value),
            CellValue::Text(value) => match parse_iso_date(value) {
                Some(date) => Some(date),
                None => {
                    self.errors.push(FieldError::MalformedDate {
                        field,
                        value: value.clone(),
                    });
                    None
                }
            },
            other => {
                self.errors.push(FieldError::MalformedDate {
                    field,
                    value: other.to_string(),
                });
                None
            }
        }
    }

    /// Reads a date that must be present; a missing cell counts as malformed.
    pub fn required_date(&mut self, field: &'static str) -> NaiveDate {
        if self.cell(field).is_none() {
            self.errors.push(FieldError::MalformedDate {
                field,
                value: String::new(),
            });
            return NaiveDate::default();
        }
        self.date(field).unwrap_or_default()
    }

    pub fn boolean(&mut self, field: &'static str) -> Option<bool> {
        let cell = self.cell(field)?;
        let parsed = match cell {
            CellValue::Bool(value) => Some(*value),
            CellValue::Text(value) => parse_lax_bool(value),
            CellValue::Number(value) if *value == 1.0 => Some(true),
            CellValue::Number(value) if *value == 0.0 => Some(false),
            CellValue::Number(_) | CellValue::Date(_) | CellValue::Missing => None,
        };
        if parsed.is_none() {
            self.errors.push(FieldError::InvalidBool {
                field,
                value: cell.to_string(),
            });
        }
        parsed
    }

    pub fn boolean_or(&mut self, field: &'static str, default: bool) -> bool {
        if self.cell(field).is_none() {
            return default;
        }
        self.boolean(field).unwrap_or(default)
    }

    /// Reads an absolute `http`/`https` URL with a host.
    pub fn url(&mut self, field: &'static str) -> Option<Url> {
        let cell = self.cell(field)?;
        let CellValue::Text(value) = cell else {
            self.wrong_type(field, "URL string", cell);
            return None;
        };
        match parse_http_url(value) {
            Ok(url) => Some(url),
            Err(reason) => {
                self.errors.push(FieldError::InvalidUrl {
                    field,
                    value: value.clone(),
                    reason,
                });
                None
            }
        }
    }
}

/// Parses a finite number from text.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Lenient boolean parsing used at construction time.
pub fn parse_lax_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" | "active" => Some(true),
        "false" | "f" | "no" | "n" | "off" | "0" | "inactive" => Some(false),
        _ => None,
    }
}

/// Strict URL validation: absolute, `http`/`https`, non-empty host.
pub fn parse_http_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value.trim()).map_err(|error| error.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err("URL scheme should be 'http' or 'https'".to_string());
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err("URL has no host".to_string()),
    }
}
