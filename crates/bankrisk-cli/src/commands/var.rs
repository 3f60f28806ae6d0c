//! VaR command implementation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use bankrisk_api::VarRequest;

use super::{read_input, read_request, Context};
use crate::error::{CliError, CliResult};
use crate::output::{print_response, KeyValue, View};

/// Arguments for the var command.
#[derive(Args, Debug)]
pub struct VarArgs {
    /// Comma-separated returns, e.g. -0.02,0.01,0.005
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub returns: Vec<f64>,

    /// JSON request body, or a CSV file with one return per row (`-` reads stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Confidence level, e.g. 0.95
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Method: historical, parametric or monte_carlo
    #[arg(short, long)]
    pub method: Option<String>,

    /// Seed for the Monte Carlo generator
    #[arg(long)]
    pub seed: Option<u64>,
}

impl VarArgs {
    /// Builds the request from inline returns or the input file, then
    /// applies the flags on top.
    pub fn to_request(&self) -> CliResult<VarRequest> {
        let mut request = match (&self.input, self.returns.is_empty()) {
            (Some(_), false) => return Err(CliError::ConflictingReturns),
            (Some(path), true) => load_request(path)?,
            (None, false) => VarRequest::new(self.returns.clone()),
            (None, true) => {
                return Err(CliError::MissingArgument(
                    "--returns or --input".to_string(),
                ))
            }
        };

        if let Some(confidence) = self.confidence {
            request.confidence_level = Some(confidence);
        }
        if let Some(method) = &self.method {
            request.method = method.clone();
        }
        if let Some(seed) = self.seed {
            request.seed = Some(seed);
        }
        Ok(request)
    }
}

fn load_request(path: &Path) -> CliResult<VarRequest> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        Ok(VarRequest::new(read_returns_csv(path)?))
    } else {
        read_request(path)
    }
}

/// Reads the first column of a CSV file. A non-numeric first row is a header.
fn read_returns_csv(path: &Path) -> CliResult<Vec<f64>> {
    let content = read_input(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let parse_error = |message: String| CliError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let mut returns = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| parse_error(e.to_string()))?;
        let Some(field) = record.get(0).map(str::trim) else {
            continue;
        };
        if field.is_empty() {
            continue;
        }
        match field.parse::<f64>() {
            Ok(value) => returns.push(value),
            Err(_) if row == 0 => continue,
            Err(_) => return Err(parse_error(format!("row {}: '{}' is not a number", row + 1, field))),
        }
    }
    Ok(returns)
}

/// Executes the var command.
pub fn execute(args: VarArgs, ctx: &Context) -> Result<()> {
    let request = args.to_request()?;
    let result = ctx.service.value_at_risk(&request);

    print_response("Value at Risk", result, ctx.format, |r| {
        View::metrics(vec![
            KeyValue::new("Method", r.method.clone()),
            KeyValue::percent("Confidence", r.confidence_level),
            KeyValue::number("VaR", r.var),
            KeyValue::number("CVaR", r.cvar),
            KeyValue::new("Observations", r.sample_size.to_string()),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args() -> VarArgs {
        VarArgs {
            returns: vec![],
            input: None,
            confidence: None,
            method: None,
            seed: None,
        }
    }

    #[test]
    fn test_inline_returns_with_overrides() {
        let request = VarArgs {
            returns: vec![-0.01, 0.02],
            confidence: Some(0.99),
            method: Some("parametric".to_string()),
            ..args()
        }
        .to_request()
        .unwrap();

        assert_eq!(request.returns, vec![-0.01, 0.02]);
        assert_eq!(request.confidence_level, Some(0.99));
        assert_eq!(request.method, "parametric");
        assert_eq!(request.seed, None);
    }

    #[test]
    fn test_requires_exactly_one_source() {
        assert!(matches!(
            args().to_request(),
            Err(CliError::MissingArgument(_))
        ));
        assert!(matches!(
            VarArgs {
                returns: vec![0.01],
                input: Some(PathBuf::from("returns.json")),
                ..args()
            }
            .to_request(),
            Err(CliError::ConflictingReturns)
        ));
    }

    #[test]
    fn test_csv_input_skips_header() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "return,date").unwrap();
        writeln!(file, "-0.02,2024-01-02").unwrap();
        writeln!(file, "0.015,2024-01-03").unwrap();

        let request = VarArgs {
            input: Some(file.path().to_path_buf()),
            ..args()
        }
        .to_request()
        .unwrap();
        assert_eq!(request.returns, vec![-0.02, 0.015]);
        assert_eq!(request.method, "historical");
    }

    #[test]
    fn test_csv_input_rejects_bad_row() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "0.01").unwrap();
        writeln!(file, "abc").unwrap();

        let err = read_returns_csv(file.path()).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }
}
