//! CLI library components for the PDGA export ingester.

pub mod download;
pub mod logging;
pub mod pipeline;
