//! Record definitions for the PDGA equipment and manufacturer exports.
//!
//! The crate owns the two record kinds ([`DiscRecord`], [`CompanyRecord`]),
//! the tagged cell model rows travel in, and the [`RecordSchema`] trait that
//! turns a normalized row into a typed record or a [`RecordError`].

pub mod company;
pub mod disc;
pub mod error;
pub mod outcome;
pub mod schema;
pub mod social;
pub mod table;

pub use company::{CompanyRecord, WEBSITE_PLATFORM_FIELD};
pub use disc::{DEFAULT_WEIGHT_MAX, DiscRecord};
pub use error::{FieldError, RecordError};
pub use outcome::{RowFailure, ValidationOutcome};
pub use schema::{
    FieldKind, FieldReader, FieldRule, FieldSpec, RecordKind, RecordSchema, parse_http_url,
    parse_iso_date, parse_lax_bool, parse_number, strip_unrelated_keys,
};
pub use social::{SOCIAL_DOMAINS, SocialPlatform};
pub use table::{CellValue, Row};
