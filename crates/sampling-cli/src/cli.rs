//! CLI argument definitions for the market sampling generator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "market-sampling",
    version,
    about = "Market Sampling Dummy Data Generator - Synthesize campaign data as a spreadsheet",
    long_about = "Generate reproducible dummy data for market sampling campaigns.\n\n\
                  Produces areas, promoters, sampling events and respondents and\n\
                  writes them as sheets of a single XLSX workbook."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Allow generated names and contacts to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the dummy data workbook.
    Generate(GenerateArgs),

    /// List the built-in lookup values.
    Lookups,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// JSON file with generation options; flags below override it.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for the random source (default: 42).
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Output workbook path (default: data/market_sampling_dummy_data.xlsx).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of promoters to generate (default: 5).
    #[arg(long = "promoters")]
    pub promoters: Option<u32>,

    /// Number of sampling events to generate (default: 6).
    #[arg(long = "samples")]
    pub samples: Option<u32>,

    /// Latest possible campaign start date (default: today).
    #[arg(long = "reference-date", value_name = "YYYY-MM-DD")]
    pub reference_date: Option<NaiveDate>,

    /// Generate and check the data without writing the workbook.
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
