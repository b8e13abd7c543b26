//! DataFrame → row extraction.

use polars::prelude::*;

use pdga_model::{CellValue, Row};

use crate::error::Result;

/// Converts a Polars `AnyValue` to its raw text form.
///
/// Returns an empty string for `Null`; floats keep their shortest form.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => v.to_string(),
        AnyValue::Float64(v) => v.to_string(),
        other => other.to_string(),
    }
}

/// Extracts one [`Row`] per DataFrame row, keyed by column name.
///
/// Cells are passed through as raw text; blank cells become `Missing`.
pub fn frame_to_rows(df: &DataFrame) -> Result<Vec<Row>> {
    let columns = df.get_columns();
    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut row = Row::new(idx);
        for column in columns {
            let value = any_to_string(column.get(idx)?);
            row.insert(column.name().to_string(), CellValue::text(value));
        }
        rows.push(row);
    }
    Ok(rows)
}
