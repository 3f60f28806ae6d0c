//! Market risk DTOs.

use serde::{Deserialize, Serialize};

/// VaR request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarRequest {
    /// Fractional returns; must not be empty.
    #[serde(default)]
    pub returns: Vec<f64>,
    /// Confidence level; the configured level when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<f64>,
    /// `historical`, `parametric` or `monte_carlo`.
    #[serde(default = "default_method")]
    pub method: String,
    /// Monte Carlo seed; the configured seed when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_method() -> String {
    "historical".to_string()
}

impl VarRequest {
    /// Request for `returns` with every other field defaulted.
    pub fn new(returns: Vec<f64>) -> Self {
        Self {
            returns,
            confidence_level: None,
            method: default_method(),
            seed: None,
        }
    }
}

/// VaR and CVaR of a return series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarResponse {
    /// Value at Risk (return precision).
    pub var: f64,
    /// Historical CVaR (return precision).
    pub cvar: f64,
    /// Confidence level used.
    pub confidence_level: f64,
    /// Canonical method name.
    pub method: String,
    /// Number of returns.
    pub sample_size: usize,
}
