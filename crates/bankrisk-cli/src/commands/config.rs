//! Config command implementation.
//!
//! Shows the engine configuration the other commands run with.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;
use crate::cli::OutputFormat;
use crate::output::print_json;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration (defaults merged with --config)
    Show,
}

/// Executes the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_json(&ctx.config),
        _ => {
            print!("{}", ctx.config.to_toml()?);
            Ok(())
        }
    }
}
