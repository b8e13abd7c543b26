use std::fmt;

use thiserror::Error;

use crate::schema::RecordKind;

/// A single field that failed coercion during record construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field}: field required")]
    Missing { field: &'static str },

    #[error("{field}: expected {expected}, found {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{field}: '{value}' is not a valid number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field}: '{value}' is not a valid date (expected YYYY-MM-DD)")]
    MalformedDate { field: &'static str, value: String },

    #[error("{field}: '{value}' is not a valid boolean")]
    InvalidBool { field: &'static str, value: String },

    #[error("{field}: '{value}' is not a valid URL: {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Missing { field }
            | FieldError::WrongType { field, .. }
            | FieldError::InvalidNumber { field, .. }
            | FieldError::MalformedDate { field, .. }
            | FieldError::InvalidBool { field, .. }
            | FieldError::InvalidUrl { field, .. } => field,
        }
    }
}

/// Every field error raised while constructing one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    pub kind: RecordKind,
    pub errors: Vec<FieldError>,
}

impl RecordError {
    pub fn new(kind: RecordKind, errors: Vec<FieldError>) -> Self {
        Self { kind, errors }
    }

    /// True when any error refers to `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field() == field)
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        write!(
            f,
            "{count} validation error{} for {}",
            if count == 1 { "" } else { "s" },
            self.kind
        )?;
        for error in &self.errors {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RecordError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_error_lists_every_field() {
        let error = RecordError::new(
            RecordKind::Disc,
            vec![
                FieldError::Missing { field: "name" },
                FieldError::InvalidNumber {
                    field: "speed",
                    value: "N/A".to_string(),
                },
            ],
        );
        insta::assert_snapshot!(
            error.to_string(),
            @"2 validation errors for disc; name: field required; speed: 'N/A' is not a valid number"
        );
        assert!(error.mentions("speed"));
        assert!(!error.mentions("glide"));
    }
}
