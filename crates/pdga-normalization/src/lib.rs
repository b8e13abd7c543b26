//! Per-field cleanup of mapped PDGA rows.
//!
//! The [`Normalizer`] walks each row against a record schema's field table:
//! text is trimmed, company names canonicalized, numbers and dates coerced,
//! the status column mapped to a boolean and websites canonicalized. It never
//! raises; anomalies are counted in a [`NormalizationReport`].

#![deny(unsafe_code)]

pub mod executor;
pub mod normalization;
pub mod reachability;
pub mod report;

pub use executor::{NormalizedBatch, Normalizer, normalize_rows};
pub use normalization::dates::parse_source_date;
pub use normalization::names::{COMPANY_NAME_SUBSTITUTIONS, canonical_company_name};
pub use normalization::options::{MissingValuePolicy, NormalizationOptions, ReachabilityOptions};
pub use normalization::status::parse_status;
pub use normalization::website::{WebsiteCleanup, canonicalize_website};
pub use reachability::{CheckOutcome, HttpChecker, UrlChecker};
pub use report::NormalizationReport;
