//! Row normalization driven by a record schema's field table.

use pdga_model::{
    CellValue, FieldKind, FieldRule, FieldSpec, RecordSchema, Row, SocialPlatform,
    WEBSITE_PLATFORM_FIELD,
};
use tracing::{debug, warn};

use crate::normalization::dates::parse_source_date;
use crate::normalization::names::canonical_company_name;
use crate::normalization::options::{MissingValuePolicy, NormalizationOptions};
use crate::normalization::status::parse_status;
use crate::normalization::website::{WebsiteCleanup, canonicalize_website};
use crate::reachability::{CheckOutcome, Throttle, UrlChecker};
use crate::report::NormalizationReport;

/// Normalized rows plus the anomaly counts gathered on the way.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub rows: Vec<Row>,
    pub report: NormalizationReport,
}

/// Cleans rows cell by cell before record construction.
///
/// Normalization never fails: anomalies become `Missing` (or zero) and are
/// counted in the [`NormalizationReport`]. Rows without a checker, or with the
/// reachability check disabled, are a fixed point of [`Normalizer::normalize`].
pub struct Normalizer<'a> {
    options: &'a NormalizationOptions,
    checker: Option<&'a dyn UrlChecker>,
    throttle: Option<Throttle>,
}

impl<'a> Normalizer<'a> {
    pub fn new(options: &'a NormalizationOptions) -> Self {
        Self {
            options,
            checker: None,
            throttle: None,
        }
    }

    /// Attaches the checker used when the reachability check is enabled.
    pub fn with_checker(mut self, checker: &'a dyn UrlChecker) -> Self {
        if let Some(reachability) = &self.options.reachability {
            self.checker = Some(checker);
            self.throttle = Some(Throttle::new(reachability.min_interval));
        }
        self
    }

    pub fn normalize<T: RecordSchema>(&mut self, rows: Vec<Row>) -> NormalizedBatch {
        let mut report = NormalizationReport::default();
        let rows = rows
            .into_iter()
            .map(|row| self.normalize_row::<T>(row, &mut report))
            .collect();
        report.log();
        NormalizedBatch { rows, report }
    }

    pub fn normalize_row<T: RecordSchema>(
        &mut self,
        mut row: Row,
        report: &mut NormalizationReport,
    ) -> Row {
        report.rows += 1;
        let mut social = Vec::new();

        for (name, cell) in row.cells.iter_mut() {
            trim_text(cell);
            let Some(spec) = T::field(name) else {
                continue;
            };
            match spec.kind {
                FieldKind::Text => {
                    if spec.rule == FieldRule::CompanyName {
                        substitute_name(cell, report);
                    }
                }
                FieldKind::Number => coerce_number(cell),
                FieldKind::Date => coerce_date(spec, cell, report),
                FieldKind::Bool => {
                    if spec.rule == FieldRule::Status {
                        coerce_status(cell);
                    }
                }
                FieldKind::Url => {
                    if spec.rule == FieldRule::Website
                        && let Some(platform) = self.clean_website(spec, row.index, cell, report)
                    {
                        social.push((spec.name, platform));
                    }
                }
            }
        }

        if self.options.route_social_links {
            for (field, platform) in social {
                route_social(&mut row, field, platform, report);
            }
        }

        if self.options.missing_values == MissingValuePolicy::ZeroFill {
            for spec in T::FIELDS.iter().filter(|spec| spec.kind == FieldKind::Number) {
                if let Some(cell) = row.cells.get_mut(spec.name)
                    && cell.is_missing()
                {
                    *cell = CellValue::Number(0.0);
                    report.zero_filled += 1;
                }
            }
        }
        row
    }

    /// Canonicalizes a website cell, returning the social platform it points at.
    fn clean_website(
        &mut self,
        spec: &FieldSpec,
        row: usize,
        cell: &mut CellValue,
        report: &mut NormalizationReport,
    ) -> Option<SocialPlatform> {
        let CellValue::Text(raw) = cell else {
            return None;
        };
        match canonicalize_website(raw) {
            WebsiteCleanup::Accepted(url) => {
                *cell = match self.check_reachable(&url, report) {
                    Some(final_url) => CellValue::Text(final_url),
                    None => CellValue::Missing,
                };
                None
            }
            WebsiteCleanup::Social { url, platform } => {
                debug!(row, field = spec.name, %platform, "social-media website");
                report.social_websites += 1;
                *cell = CellValue::Text(url);
                Some(platform)
            }
            WebsiteCleanup::Rejected { reason } => {
                debug!(row, field = spec.name, value = %raw, %reason, "rejected website");
                report.urls_rejected += 1;
                *cell = CellValue::Missing;
                None
            }
        }
    }

    /// Returns the URL to keep, or `None` when the checker rejected it.
    fn check_reachable(&mut self, url: &str, report: &mut NormalizationReport) -> Option<String> {
        let Some(checker) = self.checker else {
            return Some(url.to_string());
        };
        if let Some(throttle) = self.throttle.as_mut() {
            throttle.wait();
        }
        match checker.check(url) {
            CheckOutcome::Reachable { final_url } => Some(final_url),
            CheckOutcome::Unreachable { reason } => {
                warn!(url, %reason, "website unreachable");
                report.checks_failed += 1;
                None
            }
        }
    }
}

/// Normalizes rows with no reachability checker attached.
pub fn normalize_rows<T: RecordSchema>(
    rows: Vec<Row>,
    options: &NormalizationOptions,
) -> NormalizedBatch {
    Normalizer::new(options).normalize::<T>(rows)
}

fn trim_text(cell: &mut CellValue) {
    if let CellValue::Text(value) = cell {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            *cell = CellValue::Missing;
        } else if trimmed.len() != value.len() {
            *value = trimmed.to_string();
        }
    }
}

fn substitute_name(cell: &mut CellValue, report: &mut NormalizationReport) {
    if let CellValue::Text(name) = cell
        && let Some(canonical) = canonical_company_name(name)
    {
        *name = canonical.to_string();
        report.names_substituted += 1;
    }
}

fn coerce_number(cell: &mut CellValue) {
    if let CellValue::Text(value) = cell
        && let Some(number) = pdga_model::parse_number(value)
    {
        *cell = CellValue::Number(number);
    }
}

fn coerce_date(spec: &FieldSpec, cell: &mut CellValue, report: &mut NormalizationReport) {
    let CellValue::Text(value) = cell else {
        return;
    };
    match parse_source_date(value) {
        Some(date) => *cell = CellValue::Date(date),
        None => {
            debug!(field = spec.name, value = %value, "unparseable date");
            report.dates_coerced += 1;
            *cell = CellValue::Missing;
        }
    }
}

fn coerce_status(cell: &mut CellValue) {
    if let CellValue::Text(value) = cell
        && let Some(active) = parse_status(value)
    {
        *cell = CellValue::Bool(active);
    }
}

fn route_social(
    row: &mut Row,
    field: &str,
    platform: SocialPlatform,
    report: &mut NormalizationReport,
) {
    let Some(target) = platform.company_field() else {
        return;
    };
    if row.get(target).is_some_and(|cell| !cell.is_missing()) {
        return;
    }
    if let Some(url) = row.cells.insert(field.to_string(), CellValue::Missing) {
        row.insert(target, url);
        row.insert(WEBSITE_PLATFORM_FIELD, CellValue::text(platform.as_str()));
        report.social_routed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdga_model::{CompanyRecord, DiscRecord};

    fn disc_row(pairs: &[(&str, &str)]) -> Row {
        Row::from_pairs(0, pairs.iter().map(|(k, v)| (*k, CellValue::text(*v))))
    }

    #[test]
    fn trims_text_and_blanks_become_missing() {
        let row = disc_row(&[("name", "  Destroyer "), ("cert", "   ")]);
        let batch = normalize_rows::<DiscRecord>(vec![row], &NormalizationOptions::default());
        let row = &batch.rows[0];
        assert_eq!(row.get("name"), Some(&CellValue::Text("Destroyer".into())));
        assert_eq!(row.get("cert"), Some(&CellValue::Missing));
    }

    #[test]
    fn unknown_policy_leaves_numbers_missing() {
        let row = disc_row(&[("weight_max", ""), ("speed", "12")]);
        let options = NormalizationOptions::new().with_missing_values(MissingValuePolicy::Unknown);
        let batch = normalize_rows::<DiscRecord>(vec![row], &options);
        assert_eq!(batch.rows[0].get("weight_max"), Some(&CellValue::Missing));
        assert_eq!(batch.rows[0].get("speed"), Some(&CellValue::Number(12.0)));
        assert_eq!(batch.report.zero_filled, 0);
    }

    #[test]
    fn zero_fill_ignores_absent_and_text_fields() {
        let row = disc_row(&[("diameter", ""), ("description", "")]);
        let batch = normalize_rows::<DiscRecord>(vec![row], &NormalizationOptions::default());
        let row = &batch.rows[0];
        assert_eq!(row.get("diameter"), Some(&CellValue::Number(0.0)));
        assert_eq!(row.get("description"), Some(&CellValue::Missing));
        assert_eq!(row.get("weight_max"), None);
        assert_eq!(batch.report.zero_filled, 1);
    }

    #[test]
    fn zero_fill_leaves_blank_text_missing() {
        let disc = disc_row(&[("cert", ""), ("flex", "")]);
        let batch = normalize_rows::<DiscRecord>(vec![disc], &NormalizationOptions::default());
        assert_eq!(batch.rows[0].get("cert"), Some(&CellValue::Missing));
        assert_eq!(batch.rows[0].get("flex"), Some(&CellValue::Number(0.0)));

        let company = disc_row(&[("city", "  "), ("website", ""), ("is_active", "")]);
        let batch =
            normalize_rows::<CompanyRecord>(vec![company], &NormalizationOptions::default());
        let row = &batch.rows[0];
        assert_eq!(row.get("city"), Some(&CellValue::Missing));
        assert_eq!(row.get("website"), Some(&CellValue::Missing));
        assert_eq!(row.get("is_active"), Some(&CellValue::Missing));
        assert_eq!(batch.report.zero_filled, 0);
    }

    #[test]
    fn routing_keeps_an_existing_dedicated_link() {
        let row = Row::from_pairs(
            0,
            [
                ("website", CellValue::text("twitter.com/new")),
                ("twitter", CellValue::text("https://twitter.com/old")),
            ],
        );
        let options = NormalizationOptions::new().with_social_routing(true);
        let batch = normalize_rows::<CompanyRecord>(vec![row], &options);
        let row = &batch.rows[0];
        assert_eq!(
            row.get("website"),
            Some(&CellValue::Text("https://twitter.com/new".into()))
        );
        assert_eq!(batch.report.social_routed, 0);
    }
}
