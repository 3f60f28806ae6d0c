//! CLI command implementations.

pub mod capital;
pub mod config;
pub mod credit;
pub mod oprisk;
pub mod rwa;
pub mod stress;
pub mod var;

pub use capital::CapitalArgs;
pub use config::ConfigArgs;
pub use credit::CreditArgs;
pub use var::VarArgs;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::de::DeserializeOwned;

use bankrisk_api::RiskService;
use bankrisk_config::EngineConfig;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Everything a command needs to run.
pub struct Context {
    /// Effective engine configuration.
    pub config: EngineConfig,
    /// Service built from `config`.
    pub service: RiskService,
    /// Requested output format.
    pub format: OutputFormat,
}

/// Arguments for commands that take a JSON request body.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON request file (`-` reads stdin)
    #[arg(short, long)]
    pub input: PathBuf,
}

/// Reads a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> CliResult<String> {
    let read_error = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(read_error)?;
        Ok(content)
    } else {
        std::fs::read_to_string(path).map_err(read_error)
    }
}

/// Reads and parses a JSON request body.
pub fn read_request<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let content = read_input(path)?;
    serde_json::from_str(&content).map_err(|e| CliError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
