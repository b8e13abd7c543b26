use crate::error::RecordError;
use crate::table::Row;

/// A row that failed construction, kept with the reason.
#[derive(Debug, Clone)]
pub struct RowFailure {
    pub row: Row,
    pub error: RecordError,
}

/// Result of validating one batch: accepted records plus per-row failures.
#[derive(Debug, Clone)]
pub struct ValidationOutcome<T> {
    pub records: Vec<T>,
    pub failures: Vec<RowFailure>,
}

impl<T> Default for ValidationOutcome<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> ValidationOutcome<T> {
    pub fn accepted(&self) -> usize {
        self.records.len()
    }

    pub fn rejected(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.accepted() + self.rejected()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
