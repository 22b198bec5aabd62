//! supplyflow - Synthetic supply-chain flow dataset and dashboard
//!
//! supplyflow provides:
//! - Seeded generation of supplier → category → channel flow edges
//! - Channel × category sales summary
//! - Per-category flow conservation check
//! - CSV export of both tables
//! - A self-contained HTML dashboard (flow diagram + sales table)

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod dashboard;
mod flows;

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
