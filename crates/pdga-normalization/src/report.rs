use tracing::info;

/// Counts of the anomalies absorbed while normalizing a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    pub rows: usize,
    pub names_substituted: usize,
    /// Date cells that could not be parsed and became missing.
    pub dates_coerced: usize,
    pub zero_filled: usize,
    pub social_websites: usize,
    pub social_routed: usize,
    pub urls_rejected: usize,
    pub checks_failed: usize,
}

impl NormalizationReport {
    pub fn log(&self) {
        info!(
            rows = self.rows,
            names_substituted = self.names_substituted,
            dates_coerced = self.dates_coerced,
            zero_filled = self.zero_filled,
            social_websites = self.social_websites,
            social_routed = self.social_routed,
            urls_rejected = self.urls_rejected,
            checks_failed = self.checks_failed,
            "normalization complete"
        );
    }
}
