//! CLI argument definitions for the catalog explorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog-explorer",
    version,
    about = "Explore a streaming title catalog from its CSV export",
    long_about = "Load a title catalog CSV, filter it by content type and release year,\n\
                  and print the dashboard summaries: type distribution, titles added\n\
                  per year and the top genres, countries and directors."
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
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path in each log line.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Omit span close events from JSON logs.
    #[arg(long = "no-log-spans", global = true)]
    pub no_log_spans: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter the catalog and print every dashboard summary.
    Summary(SummaryArgs),

    /// List the content types and release-year bounds available for filtering.
    Types(TypesArgs),
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Catalog CSV export.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Content type to keep (repeatable; default: every observed type).
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Earliest release year to keep.
    #[arg(long = "year-min", value_name = "YEAR", allow_negative_numbers = true)]
    pub year_min: Option<i32>,

    /// Latest release year to keep.
    #[arg(long = "year-max", value_name = "YEAR", allow_negative_numbers = true)]
    pub year_max: Option<i32>,

    /// Dashboard configuration file (TOML).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write the space-joined cast names to this file.
    #[arg(long = "corpus-out", value_name = "FILE")]
    pub corpus_out: Option<PathBuf>,

    /// Length of the genre, country and director rankings.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Parser)]
pub struct TypesArgs {
    /// Catalog CSV export.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
