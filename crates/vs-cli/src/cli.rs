//! CLI argument definitions for the value set extractor.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "extract-valueset",
    version,
    about = "Convert a value set workbook to terminology bundle JSON",
    long_about = "Convert a two-sheet value set workbook to JSON.\n\n\
                  Sheet 1 holds the value set metadata, sheet 2 the expansion with a\n\
                  `Code` header on row 12. The output is `[ValueSet, [codes...]]`, as\n\
                  accepted by the terminology bundle generator."
)]
pub struct Cli {
    /// Value set workbook (.xlsx, .xlsm, .xlsb, .xls, .ods).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the JSON document (overwritten if present).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Pretty-print the JSON document.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
