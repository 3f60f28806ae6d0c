//! Portfolio positions and shock scenarios.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Asset class of a portfolio position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetClass {
    /// Listed equity, hit by the equity shock.
    Equity,
    /// Rate-sensitive instruments, hit by the interest rate shock.
    FixedIncome,
    /// Corporate credit, hit by the credit spread shock.
    CorporateBond,
    /// Any other class; never shocked.
    Other(String),
}

impl AssetClass {
    /// Wire name of the class.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equity => "equity",
            Self::FixedIncome => "fixed_income",
            Self::CorporateBond => "corporate_bond",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for AssetClass {
    fn from(s: &str) -> Self {
        match s {
            "equity" => Self::Equity,
            "fixed_income" => Self::FixedIncome,
            "corporate_bond" => Self::CorporateBond,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for AssetClass {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<AssetClass> for String {
    fn from(c: AssetClass) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single portfolio holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Asset class.
    pub asset_class: AssetClass,
    /// Current market value.
    pub value: f64,
    /// Modified duration, used by the interest rate shock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Position {
    /// Creates a position without a duration.
    pub fn new(asset_class: impl Into<AssetClass>, value: f64) -> Self {
        Self {
            asset_class: asset_class.into(),
            value,
            duration: None,
        }
    }

    /// Sets the duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Shock magnitudes keyed by risk factor.
///
/// Absent shocks leave the matching positions untouched. Unknown keys are
/// ignored when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StressScenario {
    /// Relative equity price move, e.g. `-0.30`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equity_shock: Option<f64>,
    /// Parallel rate move in decimal, e.g. `0.02` for +200bp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate_shock: Option<f64>,
    /// Relative corporate bond price move.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_spread_shock: Option<f64>,
}

impl StressScenario {
    /// Scenario with no shocks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the equity shock.
    pub fn with_equity_shock(mut self, shock: f64) -> Self {
        self.equity_shock = Some(shock);
        self
    }

    /// Sets the interest rate shock.
    pub fn with_interest_rate_shock(mut self, shock: f64) -> Self {
        self.interest_rate_shock = Some(shock);
        self
    }

    /// Sets the credit spread shock.
    pub fn with_credit_spread_shock(mut self, shock: f64) -> Self {
        self.credit_spread_shock = Some(shock);
        self
    }

    /// True when no shock is set.
    pub fn is_empty(&self) -> bool {
        self.equity_shock.is_none()
            && self.interest_rate_shock.is_none()
            && self.credit_spread_shock.is_none()
    }
}
