//! CLI argument definitions for the ClientPulse import tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "clientpulse",
    version,
    about = "ClientPulse CSV import - load client spreadsheets into the CRM",
    long_about = "Import clients from a CSV export.\n\n\
                  Columns are auto-matched to client fields and can be adjusted\n\
                  with --map and --skip before any record is created."
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

    /// Allow row-level client data (names, emails, phones) in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import clients from a CSV file.
    Import(ImportArgs),

    /// List the client fields a CSV column can map to.
    Fields,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the CSV file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Reassign a column, by header name or 0-based index
    /// (e.g. --map "Work Email=email" or --map 2=phone).
    ///
    /// Skips are applied before maps, so a claimed field can be moved with
    /// --skip of its old column plus --map of the new one.
    #[arg(long = "map", value_name = "COLUMN=FIELD")]
    pub map: Vec<String>,

    /// Drop a column from the import, by header name or 0-based index.
    #[arg(long = "skip", value_name = "COLUMN")]
    pub skip: Vec<String>,

    /// Load a saved column mapping (JSON) instead of auto-detection.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Save the final column mapping (JSON) for reuse with --mapping.
    #[arg(long = "save-mapping", value_name = "PATH")]
    pub save_mapping: Option<PathBuf>,

    /// Show the mapping and preview, then stop without creating records.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write created records to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
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
