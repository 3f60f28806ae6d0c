//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use bankrisk_api::{ApiError, ApiResponse, ApiResult};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// What a command shows for a successful response.
pub struct View<R> {
    /// Headline figures.
    pub metrics: Vec<KeyValue>,
    /// Per-row breakdown, empty when the contract has none.
    pub details: Vec<R>,
}

impl View<KeyValue> {
    /// A view with headline figures only.
    pub fn metrics(metrics: Vec<KeyValue>) -> Self {
        Self {
            metrics,
            details: Vec::new(),
        }
    }
}

impl<R> View<R> {
    /// A view with headline figures and a detail table.
    pub fn with_details(metrics: Vec<KeyValue>, details: Vec<R>) -> Self {
        Self { metrics, details }
    }
}

/// Prints a service result in the requested format.
///
/// JSON prints the response envelope whether or not the call succeeded.
/// A failed call is returned as an error so the process exits non-zero.
pub fn print_response<T, R>(
    title: &str,
    result: ApiResult<T>,
    format: OutputFormat,
    view: impl FnOnce(&T) -> View<R>,
) -> anyhow::Result<()>
where
    T: Serialize,
    R: Serialize + Tabled,
{
    if format == OutputFormat::Json {
        let failure = result.as_ref().err().cloned();
        print_json(&ApiResponse::from_result(result))?;
        return match failure {
            Some(err) => Err(request_error(&err).into()),
            None => Ok(()),
        };
    }

    let data = result.map_err(|err| request_error(&err))?;
    let view = view(&data);

    match format {
        OutputFormat::Csv => {
            print_csv(&view.metrics)?;
            if !view.details.is_empty() {
                println!();
                print_csv(&view.details)?;
            }
        }
        _ => {
            print_header(title);
            print_table(&view.metrics);
            if !view.details.is_empty() {
                print_header("Details");
                print_table(&view.details);
            }
        }
    }
    Ok(())
}

fn request_error(err: &ApiError) -> CliError {
    CliError::Request {
        code: err.code().to_string(),
        message: err.message().to_string(),
    }
}

/// Prints rows as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints rows as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.red());
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Formats a ratio as a percentage string.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Formats a currency amount with thousands separators.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Formats a pass/fail flag.
pub fn format_flag(ok: bool) -> String {
    let label = if ok { "PASS" } else { "FAIL" };
    label.to_string()
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    #[serde(rename = "metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a plain number.
    pub fn number(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, value.to_string())
    }

    /// Creates a key-value pair formatted as an amount.
    pub fn amount(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_amount(value))
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_percent(value))
    }
}
