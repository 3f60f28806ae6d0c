//! Operational risk capital from historical loss events.
//!
//! The capital figure is `mean + k * std` of the observed loss amounts
//! (k = 3 by default). This is a normal-approximation buffer, not a fitted
//! 99.9th-percentile loss distribution.

use bankrisk_math::statistics::SampleSummary;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{require_non_negative, RiskError, RiskResult};

/// Default number of standard deviations added to the mean loss.
pub const DEFAULT_CAPITAL_MULTIPLIER: f64 = 3.0;

/// A single operational loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossEvent {
    /// Loss amount in currency units.
    pub amount: f64,
    /// Date of the event. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl LossEvent {
    /// Creates an undated loss event.
    pub fn new(amount: f64) -> Self {
        Self { amount, date: None }
    }

    /// Attaches the event date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Operational risk statistics and capital requirement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OperationalRiskCapital {
    /// Mean loss.
    pub expected_loss: f64,
    /// Population standard deviation of losses.
    pub std_dev: f64,
    /// Largest single loss.
    pub max_loss: f64,
    /// `expected_loss + multiplier * std_dev`.
    pub capital_requirement: f64,
    /// Number of loss events.
    pub loss_count: usize,
}

/// Loss-distribution capital calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationalRiskCalculator {
    capital_multiplier: f64,
}

impl Default for OperationalRiskCalculator {
    fn default() -> Self {
        Self {
            capital_multiplier: DEFAULT_CAPITAL_MULTIPLIER,
        }
    }
}

impl OperationalRiskCalculator {
    /// Creates a calculator adding `capital_multiplier` standard deviations.
    pub fn new(capital_multiplier: f64) -> RiskResult<Self> {
        require_non_negative("capital_multiplier", capital_multiplier)?;
        Ok(Self { capital_multiplier })
    }

    /// Returns the standard-deviation multiplier.
    pub fn capital_multiplier(&self) -> f64 {
        self.capital_multiplier
    }

    /// Capital requirement for a set of loss events.
    ///
    /// An empty history yields an all-zero result.
    ///
    /// # Errors
    ///
    /// Rejects negative or non-finite loss amounts.
    pub fn calculate_operational_risk_capital(
        &self,
        loss_events: &[LossEvent],
    ) -> RiskResult<OperationalRiskCapital> {
        if loss_events.is_empty() {
            return Ok(OperationalRiskCapital::default());
        }

        let losses = loss_events
            .iter()
            .enumerate()
            .map(|(i, event)| {
                require_non_negative("amount", event.amount).map_err(|e| match e {
                    RiskError::InvalidInput(msg) => {
                        RiskError::InvalidInput(format!("loss event {i}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect::<RiskResult<Vec<f64>>>()?;

        let summary = SampleSummary::from_sample(&losses)?;
        let capital_requirement = summary.mean + self.capital_multiplier * summary.std_dev;
        if !capital_requirement.is_finite() {
            return Err(RiskError::CalculationFailed(format!(
                "capital requirement overflowed for {} loss events",
                summary.count
            )));
        }
        let capital = OperationalRiskCapital {
            expected_loss: summary.mean,
            std_dev: summary.std_dev,
            max_loss: summary.max,
            capital_requirement,
            loss_count: summary.count,
        };

        debug!(
            loss_count = capital.loss_count,
            capital_requirement = capital.capital_requirement,
            "operational risk capital calculated"
        );
        Ok(capital)
    }
}
