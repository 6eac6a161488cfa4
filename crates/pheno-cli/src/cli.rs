//! CLI argument definitions for the phenotype generator.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pheno",
    version,
    about = "Generate binary phenotype files from IID or FID + IID lists",
    long_about = "Generate one wide phenotype table, or one file per phenotype, from lists of\n\
                  positive participants matched against a list of all participants.\n\n\
                  Participants are identified by IID only (FID is copied from IID) or by\n\
                  FID + IID. Cases are coded 2 and controls 1."
)]
#[command(group(
    ArgGroup::new("case_sources")
        .required(true)
        .multiple(true)
        .args(["input_files", "input_folder"])
))]
pub struct Cli {
    /// File containing all participants' IDs.
    #[arg(short = 'a', long = "all-participants", value_name = "FILE")]
    pub all_participants: PathBuf,

    /// Files containing positive participants' IDs, one phenotype per file.
    #[arg(
        short = 'i',
        long = "input-files",
        value_name = "FILE",
        value_delimiter = ',',
        num_args = 1..
    )]
    pub input_files: Vec<PathBuf>,

    /// Folder whose files each contain positive participants' IDs.
    #[arg(short = 'f', long = "input-folder", value_name = "DIR")]
    pub input_folder: Option<PathBuf>,

    /// Input files do not have a header line.
    #[arg(long = "no-header-line")]
    pub no_header_line: bool,

    /// Output prefix: `<PREFIX>.tsv` for the wide table, a folder with --make-separate.
    #[arg(short = 'o', long = "out", value_name = "PREFIX")]
    pub out: PathBuf,

    /// Generate a single file containing all the phenotypes [default].
    #[arg(long = "make-single", conflicts_with = "make_separate")]
    pub make_single: bool,

    /// Generate one file per phenotype.
    #[arg(long = "make-separate")]
    pub make_separate: bool,

    /// Keep spaces in phenotype names instead of replacing them with underscores.
    #[arg(long = "no-replace-space-with-underline")]
    pub no_replace_space_with_underline: bool,

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

    /// Allow participant identifiers to appear in debug logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
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
