use std::path::PathBuf;

use pdga_model::{RecordKind, RowFailure};
use pdga_normalization::NormalizationReport;

/// Everything the summary needs about one run, independent of the record type.
#[derive(Debug)]
pub struct RunSummary {
    pub kind: RecordKind,
    pub input: PathBuf,
    pub label_fields: &'static [&'static str],
    pub accepted: usize,
    pub failures: Vec<RowFailure>,
    pub report: NormalizationReport,
}

impl RunSummary {
    pub fn rejected(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.accepted + self.rejected()
    }

    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }
}
