//! CLI argument definitions for the nightly split tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "nightledger",
    version,
    about = "Split reservation exports into one row per night",
    long_about = "Split a reservation export into a nightly ledger.\n\n\
                  Each booking becomes one row per stay night, revenue and fee\n\
                  columns are apportioned across nights (totals preserved to the\n\
                  cent), and dates become Excel serial values. The result is\n\
                  written as a two-sheet workbook: Original Data + Reservations\n\
                  Daily Split."
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
    /// Split a reservation export into nightly rows and write the workbook.
    Split(SplitArgs),

    /// List the recognized input columns and their output names.
    Columns,
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Reservation export to split (.xlsx, .xlsm or .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output workbook path (default: <INPUT>_daily_split.xlsx).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of rows to preview from the input and the nightly ledger
    /// (0 disables previews).
    #[arg(long = "preview", value_name = "ROWS", default_value_t = 10)]
    pub preview: usize,

    /// Run the split and report counts without writing the workbook.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
