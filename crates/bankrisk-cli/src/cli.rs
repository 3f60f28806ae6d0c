//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    CapitalArgs, ConfigArgs, CreditArgs, InputArgs, VarArgs,
};

/// bankrisk - Banking risk analytics CLI
#[derive(Parser)]
#[command(name = "bankrisk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Engine configuration file (TOML)
    #[arg(short, long, global = true, env = "BANKRISK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Credit risk metrics (PD, LGD, EAD, expected loss)
    Credit(CreditArgs),

    /// Value at Risk and CVaR of a return series
    Var(VarArgs),

    /// Operational risk capital from loss events
    Oprisk(InputArgs),

    /// Risk-weighted assets of an exposure table
    Rwa(InputArgs),

    /// Basel III capital ratios and compliance
    Capital(CapitalArgs),

    /// Apply a stress scenario to a portfolio
    Stress(InputArgs),

    /// Inspect the engine configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON response envelope
    Json,
    /// CSV format
    Csv,
}
