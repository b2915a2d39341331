//! codeset CLI - Command-line interface for code notation expansion
//!
//! This binary expands compact code notation (`K50-K53`, `K50*`, `K50:K53`)
//! into concrete codes and selects the rows of CSV tables that contain them.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Use modules from the library crate
use codeset_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

/// Maps `-v` occurrences to a default log level; `RUST_LOG` still applies.
fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level(verbose).into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Expand {
            exprs,
            groups,
            universe,
            options,
            flags,
            json,
        } => commands::expand::run(
            &exprs,
            groups.as_deref(),
            universe.as_deref(),
            options.as_deref(),
            &flags,
            json,
        ),
        Commands::Rows {
            input,
            codes,
            cols,
            sep,
            expand,
            universe,
            options,
            flags,
            json,
        } => commands::rows::run(
            &commands::rows::RowsArgs {
                input: &input,
                codes: &codes,
                cols: &cols,
                sep: sep.as_deref(),
                expand,
                universe: universe.as_deref(),
                options: options.as_deref(),
            },
            &flags,
            json,
        ),
        Commands::Unique {
            input,
            cols,
            sep,
            strip,
        } => commands::unique::run(&input, &cols, sep.as_deref(), strip),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
