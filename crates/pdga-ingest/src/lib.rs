//! Ingestion of cached PDGA exports.
//!
//! Loads a provider CSV into a Polars DataFrame with every column kept as a
//! string and header order intact, and extracts rows for normalization.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pdga_ingest::{frame_to_rows, read_csv_frame};
//!
//! let df = read_csv_frame(Path::new("data/pdga-manufacturers_2024-05-01.csv"))?;
//! let rows = frame_to_rows(&df)?;
//! ```

mod error;
mod reader;
mod rows;

pub use error::{IngestError, Result};
pub use reader::{read_csv_frame, validate_encoding};
pub use rows::{any_to_string, frame_to_rows};
