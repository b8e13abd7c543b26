use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;
use serde::Serialize;
use tracing::info_span;

use pdga_cli::download::{SOURCES, Source, cached, fetch_and_cache};
use pdga_cli::pipeline::process_csv;
use pdga_model::RecordSchema;
use pdga_normalization::{
    HttpChecker, MissingValuePolicy, NormalizationOptions, ReachabilityOptions, UrlChecker,
};

use crate::cli::{MissingValuesArg, RunArgs, SourcesArgs};
use crate::summary::apply_table_style;
use crate::types::RunSummary;

pub fn run_sources(args: &SourcesArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let mut table = Table::new();
    table.set_header(vec!["Kind", "URL", "Cache file", "Cached"]);
    apply_table_style(&mut table);
    for source in SOURCES {
        let path = source.cache_path(&args.data_dir, today);
        table.add_row(vec![
            source.kind.to_string(),
            source.url.to_string(),
            path.display().to_string(),
            if path.exists() { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Runs the pipeline for one record kind and returns its summary.
pub fn run_records<T>(args: &RunArgs) -> Result<RunSummary>
where
    T: RecordSchema + Serialize,
{
    let span = info_span!("run", kind = %T::KIND);
    let _guard = span.enter();

    let input = resolve_input(Source::for_kind(T::KIND), args)?;
    let options = normalization_options(args);
    let checker = match &options.reachability {
        Some(reachability) => {
            Some(HttpChecker::new(reachability).context("build website checker client")?)
        }
        None => None,
    };
    let result = process_csv::<T>(
        &input,
        &options,
        checker.as_ref().map(|checker| checker as &dyn UrlChecker),
    )?;

    if args.json {
        write_json_lines(&result.outcome.records)?;
    }

    Ok(RunSummary {
        kind: T::KIND,
        input,
        label_fields: T::LABEL_FIELDS,
        accepted: result.outcome.accepted(),
        failures: result.outcome.failures,
        report: result.report,
    })
}

fn resolve_input(source: &Source, args: &RunArgs) -> Result<PathBuf> {
    if let Some(input) = &args.input {
        return Ok(input.clone());
    }
    let today = Local::now().date_naive();
    let path = if args.offline {
        cached(source, &args.data_dir, today)?
    } else {
        fetch_and_cache(source, &args.data_dir, today)
            .with_context(|| format!("fetch {} export", source.kind))?
    };
    Ok(path)
}

fn normalization_options(args: &RunArgs) -> NormalizationOptions {
    let policy = match args.missing_values {
        MissingValuesArg::Zero => MissingValuePolicy::ZeroFill,
        MissingValuesArg::Unknown => MissingValuePolicy::Unknown,
    };
    let mut options = NormalizationOptions::new()
        .with_missing_values(policy)
        .with_social_routing(args.route_social_links);
    if args.check_urls {
        options = options.with_reachability(
            ReachabilityOptions::default()
                .with_timeout(Duration::from_secs(args.url_timeout))
                .with_min_interval(Duration::from_millis(args.url_interval)),
        );
    }
    options
}

fn write_json_lines<T: Serialize>(records: &[T]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in records {
        serde_json::to_writer(&mut out, record).context("serialize record")?;
        writeln!(out).context("write record")?;
    }
    Ok(())
}

