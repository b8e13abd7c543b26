//! Export processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the cached CSV into an all-string `DataFrame`
//! 2. **Map**: drop extraneous columns and rename the rest by position
//! 3. **Normalize**: per-field cleanup driven by the record schema
//! 4. **Validate**: construct typed records, collecting per-row failures
//!
//! Each stage runs inside its own `info_span!`. Ingest and mapping errors are
//! fatal; everything after that is accumulated per row.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use pdga_ingest::{frame_to_rows, read_csv_frame};
use pdga_map::{SourceLayout, map_columns};
use pdga_model::{RecordSchema, ValidationOutcome};
use pdga_normalization::{NormalizationOptions, NormalizationReport, Normalizer, UrlChecker};
use pdga_validate::validate_rows;

/// Output of one pipeline run.
#[derive(Debug)]
pub struct PipelineResult<T> {
    pub report: NormalizationReport,
    pub outcome: ValidationOutcome<T>,
}

/// Read a provider export from disk.
pub fn ingest(path: &Path) -> Result<DataFrame> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let df = read_csv_frame(path).with_context(|| format!("read {}", path.display()))?;
    info!(rows = df.height(), columns = df.width(), "ingested export");
    Ok(df)
}

/// Map, normalize and validate a loaded export.
pub fn run_pipeline<T: RecordSchema>(
    df: &DataFrame,
    options: &NormalizationOptions,
    checker: Option<&dyn UrlChecker>,
) -> Result<PipelineResult<T>> {
    let start = Instant::now();
    let layout = SourceLayout::for_kind(T::KIND);

    let rows = {
        let span = info_span!("map", kind = %T::KIND);
        let _guard = span.enter();
        let mapped = map_columns(df, layout).context("map export columns")?;
        frame_to_rows(&mapped).context("convert mapped rows")?
    };

    let batch = {
        let span = info_span!("normalize", kind = %T::KIND);
        let _guard = span.enter();
        let mut normalizer = Normalizer::new(options);
        if let Some(checker) = checker {
            normalizer = normalizer.with_checker(checker);
        }
        normalizer.normalize::<T>(rows)
    };

    let outcome = {
        let span = info_span!("validate", kind = %T::KIND);
        let _guard = span.enter();
        validate_rows::<T>(batch.rows)
    };

    info!(
        kind = %T::KIND,
        records = outcome.accepted(),
        errors = outcome.rejected(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "pipeline complete"
    );
    Ok(PipelineResult {
        report: batch.report,
        outcome,
    })
}

/// Ingest a CSV file and run the full pipeline over it.
pub fn process_csv<T: RecordSchema>(
    path: &Path,
    options: &NormalizationOptions,
    checker: Option<&dyn UrlChecker>,
) -> Result<PipelineResult<T>> {
    let df = ingest(path)?;
    run_pipeline::<T>(&df, options, checker)
}
