//! CLI argument definitions for the PDGA export ingester.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pdga",
    version,
    about = "Ingest the PDGA approved-disc and manufacturer exports",
    long_about = "Download, clean and validate the PDGA approved-disc and manufacturer CSV exports.\n\n\
                  Every row is either turned into a typed record or reported with the\n\
                  reasons it was rejected."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true, conflicts_with = "no_log")]
    pub log_file: Option<PathBuf>,

    /// Discard all log output.
    #[arg(long = "no-log", global = true)]
    pub no_log: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest the approved-disc export.
    Discs(RunArgs),

    /// Ingest the manufacturer directory.
    Companies(RunArgs),

    /// List the provider exports and their cache file names.
    Sources(SourcesArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Read this CSV instead of the cached export.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory holding the dated export cache.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Never download; fail when today's export is not cached.
    #[arg(long = "offline")]
    pub offline: bool,

    /// How missing numeric cells are resolved.
    #[arg(long = "missing-values", value_enum, default_value = "zero")]
    pub missing_values: MissingValuesArg,

    /// Move social-media websites into the dedicated company fields.
    #[arg(long = "route-social-links")]
    pub route_social_links: bool,

    /// Check every company website over HTTP and drop unreachable ones.
    #[arg(long = "check-urls")]
    pub check_urls: bool,

    /// Per-request timeout for --check-urls.
    #[arg(long = "url-timeout", value_name = "SECS", default_value_t = 10)]
    pub url_timeout: u64,

    /// Minimum delay between two --check-urls requests.
    #[arg(long = "url-interval", value_name = "MILLIS", default_value_t = 250)]
    pub url_interval: u64,

    /// Print accepted records as JSON lines on stdout.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct SourcesArgs {
    /// Directory holding the dated export cache.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MissingValuesArg {
    /// Fill with 0.
    Zero,
    /// Leave as unknown.
    Unknown,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
