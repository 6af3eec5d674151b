//! csvcheck CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use csvcheck_cli::commands::{EXIT_FATAL, check_exit_code, load_config, run_check};
use csvcheck_cli::logging::{LogConfig, LogFormat, init_logging};
use csvcheck_cli::summary::print_summary;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_FATAL);
    }
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let config = match load_config(cli.dir.as_deref(), cli.rules.as_deref(), cli.keep_going) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error:#}");
            return EXIT_FATAL;
        }
    };
    let result = run_check(&config, &mut io::stdout().lock());
    match &result {
        Ok(report) if cli.summary => print_summary(report),
        Ok(_) => {}
        Err(error) => eprintln!("error: {error:#}"),
    }
    check_exit_code(&result)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
