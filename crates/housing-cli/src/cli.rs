//! CLI argument definitions for the housing cleaner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use housing_cluster::DEFAULT_CLUSTERS;

#[derive(Parser)]
#[command(
    name = "housing-clean",
    version,
    about = "Clean the 2017 subsidized housing dataset",
    long_about = "Select TotalUnits, ActiveSubs, Latitude, Longitude and OwnerType from the\n\
                  raw subsidized housing export, drop rows with blank or missing values and\n\
                  write the result to data/cleaned_subsidized_housing.csv.\n\n\
                  Running without a subcommand performs `clean` with the default paths."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the raw and cleaned CSV files (default: data/ beside the sources).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean the raw export and write the five-column CSV (default).
    Clean(CleanArgs),

    /// Load a cleaned CSV and show its owner-type breakdown.
    Inspect(InspectArgs),

    /// Group a cleaned CSV into k-means clusters by TotalUnits and ActiveSubs.
    Cluster(ClusterArgs),
}

#[derive(Args, Default)]
pub struct CleanArgs {
    /// Raw CSV to read (default: <DATA_DIR>/Subsidized_Housing_-_Six_Metro_Areas_-_2017.csv).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Cleaned CSV to write (default: <DATA_DIR>/cleaned_subsidized_housing.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print per-column missing counts after the report line.
    #[arg(long = "summary")]
    pub summary: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Cleaned CSV to load (default: <DATA_DIR>/cleaned_subsidized_housing.csv).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,
}

#[derive(Args)]
pub struct ClusterArgs {
    /// Cleaned CSV to load (default: <DATA_DIR>/cleaned_subsidized_housing.csv).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Number of clusters.
    #[arg(short = 'k', long = "clusters", value_name = "K", default_value_t = DEFAULT_CLUSTERS)]
    pub clusters: usize,
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
