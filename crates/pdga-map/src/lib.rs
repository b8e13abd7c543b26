//! Column mapping for the fixed-layout PDGA exports.
//!
//! Renames provider columns to the canonical field names expected by
//! `pdga-model` and drops columns no schema uses.

#![deny(unsafe_code)]

mod error;
mod layout;
mod mapper;

pub use error::{MapError, Result};
pub use layout::{COMPANY_LAYOUT, DISC_LAYOUT, SourceLayout, normalize_header};
pub use mapper::map_columns;
