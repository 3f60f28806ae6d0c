//! Scenario shock transform over a portfolio.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scenario::{AssetClass, Position, StressScenario};
use crate::error::{require_finite, RiskError, RiskResult};

/// Duration assumed for fixed income positions that carry none.
pub const DEFAULT_DURATION: f64 = 5.0;

/// A position after the scenario has been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressedPosition {
    /// The input position.
    #[serde(flatten)]
    pub position: Position,
    /// Value after shocks.
    pub stressed_value: f64,
    /// `value - stressed_value`.
    pub loss: f64,
    /// `loss / value * 100`, zero for a zero-value position.
    pub loss_pct: f64,
}

/// Portfolio totals of a stress run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StressSummary {
    /// Sum of pre-shock values.
    pub total_portfolio_value: f64,
    /// Sum of per-position losses.
    pub total_loss: f64,
    /// `total_loss / total_portfolio_value * 100`, zero for a non-positive value.
    pub loss_percentage: f64,
}

impl StressSummary {
    /// Aggregates stressed rows.
    pub fn from_rows(rows: &[StressedPosition]) -> Self {
        let total_portfolio_value: f64 = rows.iter().map(|r| r.position.value).sum();
        let total_loss: f64 = rows.iter().map(|r| r.loss).sum();
        let loss_percentage = if total_portfolio_value > 0.0 {
            total_loss / total_portfolio_value * 100.0
        } else {
            0.0
        };

        Self {
            total_portfolio_value,
            total_loss,
            loss_percentage,
        }
    }
}

/// Applies shock scenarios to portfolios.
///
/// The engine never mutates its input; every run produces a fresh table.
#[derive(Debug, Clone, PartialEq)]
pub struct StressTestEngine {
    default_duration: f64,
}

impl Default for StressTestEngine {
    fn default() -> Self {
        Self {
            default_duration: DEFAULT_DURATION,
        }
    }
}

impl StressTestEngine {
    /// Creates an engine with a custom fallback duration.
    pub fn new(default_duration: f64) -> RiskResult<Self> {
        require_finite("default_duration", default_duration)?;
        Ok(Self { default_duration })
    }

    /// Returns the fallback duration.
    pub fn default_duration(&self) -> f64 {
        self.default_duration
    }

    /// Applies `scenario` to every position.
    ///
    /// - equity: `value * (1 + equity_shock)`
    /// - fixed income: `value * (1 - duration * interest_rate_shock)`
    /// - corporate bond: `value * (1 + credit_spread_shock)`
    ///
    /// # Errors
    ///
    /// Rejects non-finite values, durations and shocks.
    pub fn run_stress_test(
        &self,
        portfolio: &[Position],
        scenario: &StressScenario,
    ) -> RiskResult<Vec<StressedPosition>> {
        validate_scenario(scenario)?;

        let rows = portfolio
            .iter()
            .enumerate()
            .map(|(i, position)| {
                self.stress(position, scenario).map_err(|e| match e {
                    RiskError::InvalidInput(msg) => {
                        RiskError::InvalidInput(format!("position {i}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect::<RiskResult<Vec<_>>>()?;

        debug!(positions = rows.len(), "stress test applied");
        Ok(rows)
    }

    /// Runs the scenario and aggregates the result.
    pub fn summarize(
        &self,
        portfolio: &[Position],
        scenario: &StressScenario,
    ) -> RiskResult<(StressSummary, Vec<StressedPosition>)> {
        let rows = self.run_stress_test(portfolio, scenario)?;
        Ok((StressSummary::from_rows(&rows), rows))
    }

    fn stress(&self, position: &Position, scenario: &StressScenario) -> RiskResult<StressedPosition> {
        let value = require_finite("value", position.value)?;
        let duration = match position.duration {
            Some(d) => require_finite("duration", d)?,
            None => self.default_duration,
        };

        let factor = match position.asset_class {
            AssetClass::Equity => scenario.equity_shock.map(|s| 1.0 + s),
            AssetClass::FixedIncome => scenario.interest_rate_shock.map(|s| 1.0 - duration * s),
            AssetClass::CorporateBond => scenario.credit_spread_shock.map(|s| 1.0 + s),
            AssetClass::Other(_) => None,
        };
        let stressed_value = factor.map_or(value, |f| value * f);
        let loss = value - stressed_value;
        let loss_pct = if value == 0.0 { 0.0 } else { loss / value * 100.0 };

        Ok(StressedPosition {
            position: position.clone(),
            stressed_value,
            loss,
            loss_pct,
        })
    }
}

fn validate_scenario(scenario: &StressScenario) -> RiskResult<()> {
    for (name, shock) in [
        ("equity_shock", scenario.equity_shock),
        ("interest_rate_shock", scenario.interest_rate_shock),
        ("credit_spread_shock", scenario.credit_spread_shock),
    ] {
        if let Some(s) = shock {
            require_finite(name, s)?;
        }
    }
    Ok(())
}
