//! Error types for column mapping.

use pdga_model::RecordKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// Column count after dropping extraneous columns does not match the layout.
    #[error(
        "{layout} export layout mismatch: expected {expected} columns after dropping extraneous ones, found {found} ({columns})",
        columns = .columns.join(", ")
    )]
    SchemaLayoutMismatch {
        layout: RecordKind,
        expected: usize,
        found: usize,
        columns: Vec<String>,
    },

    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, MapError>;
