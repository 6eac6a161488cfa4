//! Binary phenotype generator CLI.

use anyhow::Context;
use clap::{ColorChoice, Parser};
use pheno_cli::config::{RunConfig, resolve_output_mode};
use pheno_cli::logging::{LogConfig, LogFormat, init_logging};
use pheno_cli::pipeline::run;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let exit_code = match prepare(&cli).and_then(|config| run(&config)) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Validates the run configuration, then installs logging.
///
/// Nothing is created on disk, not even the log file, for an invalid configuration.
fn prepare(cli: &Cli) -> anyhow::Result<RunConfig> {
    let config = run_config_from_cli(cli)?;
    init_logging(&log_config_from_cli(cli)).context("failed to initialize logging")?;
    Ok(config)
}

/// Translate flags into an explicit run configuration.
fn run_config_from_cli(cli: &Cli) -> anyhow::Result<RunConfig> {
    let mode = resolve_output_mode(cli.make_single, cli.make_separate)?;
    let config = RunConfig::new(&cli.all_participants, &cli.out)
        .with_case_files(cli.input_files.clone())
        .with_case_folder(cli.input_folder.clone())
        .with_header(!cli.no_header_line)
        .with_replace_spaces(!cli.no_replace_space_with_underline)
        .with_mode(mode)
        .with_log_unmatched(cli.log_data);
    config.validate()?;
    Ok(config)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
}
