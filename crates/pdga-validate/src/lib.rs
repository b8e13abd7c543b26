//! Batch validation: typed records out of normalized rows.

mod engine;

pub use engine::validate_rows;
