//! Credit risk DTOs.

use serde::{Deserialize, Serialize};

/// Credit risk request. Missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRiskRequest {
    /// Bureau score (default 700).
    #[serde(default = "default_credit_score")]
    pub credit_score: f64,
    /// Debt-to-income ratio (default 0.3).
    #[serde(default = "default_debt_ratio")]
    pub debt_ratio: f64,
    /// Past delinquencies (default 0).
    #[serde(default)]
    pub delinquency_count: u32,
    /// Collateral value (default 0).
    #[serde(default)]
    pub collateral_value: f64,
    /// Exposure for the LGD split (default 100 000).
    #[serde(default = "default_exposure")]
    pub exposure: f64,
    /// Drawn balance (default 50 000).
    #[serde(default = "default_current_balance")]
    pub current_balance: f64,
    /// Committed limit (default 100 000).
    #[serde(default = "default_credit_limit")]
    pub credit_limit: f64,
}

fn default_credit_score() -> f64 {
    700.0
}

fn default_debt_ratio() -> f64 {
    0.3
}

fn default_exposure() -> f64 {
    100_000.0
}

fn default_current_balance() -> f64 {
    50_000.0
}

fn default_credit_limit() -> f64 {
    100_000.0
}

impl Default for CreditRiskRequest {
    fn default() -> Self {
        Self {
            credit_score: default_credit_score(),
            debt_ratio: default_debt_ratio(),
            delinquency_count: 0,
            collateral_value: 0.0,
            exposure: default_exposure(),
            current_balance: default_current_balance(),
            credit_limit: default_credit_limit(),
        }
    }
}

/// Credit risk metrics, rounded for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditRiskResponse {
    /// Probability of default (ratio precision).
    pub probability_of_default: f64,
    /// Loss given default (ratio precision).
    pub loss_given_default: f64,
    /// Exposure at default (currency precision).
    pub exposure_at_default: f64,
    /// Expected loss (currency precision).
    pub expected_loss: f64,
}
