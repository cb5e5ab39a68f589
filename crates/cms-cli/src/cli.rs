//! CLI argument definitions for the CSV content importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cms-csv-import",
    version,
    about = "CSV Content Importer - Load spreadsheet data into a CMS content tree",
    long_about = "Import CSV rows as published content records.\n\n\
                  Columns map to typed content fields through a user-supplied\n\
                  mapping; values are normalized per editor kind (checkbox\n\
                  lists, color pickers, reference pickers, toggles, map points)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a CSV file as content records.
    Import(ImportArgs),

    /// List a content type's importable fields per locale variant.
    Describe(DescribeArgs),

    /// Print the header row of a CSV file.
    Headers(HeadersArgs),

    /// Delete every record of a content type.
    DeleteAll(DeleteAllArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the CSV data file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Content model file: content types, languages, data-type configs.
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: PathBuf,

    /// Mapping request file: parent id, content type id, field bindings.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: PathBuf,

    /// Map and report without writing the created records anywhere.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the created records as JSON to this file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// Content model file: content types, languages, data-type configs.
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: PathBuf,

    /// Content type id to describe.
    #[arg(long = "content-type", value_name = "ID")]
    pub content_type_id: i64,
}

#[derive(Parser)]
pub struct HeadersArgs {
    /// Path to the CSV data file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,
}

#[derive(Parser)]
pub struct DeleteAllArgs {
    /// Content model file: content types, languages, data-type configs.
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: PathBuf,

    /// Content type id whose records are removed.
    #[arg(long = "content-type", value_name = "ID")]
    pub content_type_id: i64,
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
