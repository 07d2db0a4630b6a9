//! Jasmine Console - terminal reporter for Jasmine spec results
//!
//! Reads the spec results a Jasmine run produced (a JSON array of
//! `{status, fullName, failedExpectations, id, description}` records) and
//! prints a progress bar, a summary line and the cleaned stack of every
//! failure.
//!
//! ## Usage
//!
//! ```bash
//! # Report from a results file
//! jasmine-console results.json
//!
//! # Read from stdin without colors
//! cat results.json | jasmine-console --no-color
//!
//! # Machine-readable output
//! jasmine-console results.json --format json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use tracing::{debug, info};

mod cli;

use cli::Args;
use jasmine_console::config::{AppConfig, EnvConfig};
use jasmine_console::output::Formatter;
use jasmine_console::parser::ResultParser;
use jasmine_console::utils::logger::{init_logger, LogLevel};

fn main() -> Result<()> {
    let args = Args::parse();
    let env = EnvConfig::load();
    let config = AppConfig::resolve(args.config.as_deref(), &env)?
        .with_cli(args.format.as_deref(), args.no_color)?;

    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::from_str(&config.log_level).unwrap_or(LogLevel::Warn)
    };
    init_logger(level, env.log.as_deref());
    debug!(?config, "Configuration resolved");

    let input = read_input(&args)?;
    let results = ResultParser::new()
        .parse_str(&input)
        .context("Failed to parse spec results")?;
    info!("Parsed {}", results.counts());

    let report = Formatter::new(&results)
        .colors(config.colors)
        .render(config.output_format())
        .context("Failed to format spec results")?;
    print!("{report}");

    Ok(())
}

fn read_input(args: &Args) -> Result<String> {
    match args.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read results file: {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read results from stdin")?;
            Ok(input)
        }
    }
}
