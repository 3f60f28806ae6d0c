//! bankrisk CLI - Banking risk analytics from the command line.
//!
//! Usage:
//!   bankrisk credit --score 650 --debt-ratio 0.4
//!   bankrisk var --returns=-0.02,-0.01,0.005,0.01 --method parametric
//!   bankrisk rwa --input exposures.json --format json
//!   bankrisk capital --tier1 1000000 --tier2 500000 --rwa 10000000
//!   bankrisk config show

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bankrisk_api::RiskService;
use bankrisk_config::EngineConfig;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use output::print_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let service = RiskService::new(&config)?;
    debug!(format = ?cli.format, "engine ready");

    let ctx = Context {
        config,
        service,
        format: cli.format,
    };

    match cli.command {
        Commands::Credit(args) => commands::credit::execute(args, &ctx),
        Commands::Var(args) => commands::var::execute(args, &ctx),
        Commands::Oprisk(args) => commands::oprisk::execute(args, &ctx),
        Commands::Rwa(args) => commands::rwa::execute(args, &ctx),
        Commands::Capital(args) => commands::capital::execute(args, &ctx),
        Commands::Stress(args) => commands::stress::execute(args, &ctx),
        Commands::Config(args) => commands::config::execute(args, &ctx),
    }
}
