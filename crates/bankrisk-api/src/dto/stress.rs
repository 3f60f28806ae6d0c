//! Stress test DTOs.

use std::collections::BTreeMap;

use bankrisk_risk::stress::{Position, StressScenario, StressSummary, StressedPosition};
use serde::{Deserialize, Serialize};

/// Stress test request; `portfolio` must not be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressTestRequest {
    /// Positions to shock.
    #[serde(default)]
    pub portfolio: Vec<Position>,
    /// Shock name to magnitude. Unrecognised names are echoed but not applied.
    #[serde(default)]
    pub scenario: BTreeMap<String, f64>,
}

impl StressTestRequest {
    /// The recognised shocks of the request.
    pub fn stress_scenario(&self) -> StressScenario {
        StressScenario {
            equity_shock: self.scenario.get("equity_shock").copied(),
            interest_rate_shock: self.scenario.get("interest_rate_shock").copied(),
            credit_spread_shock: self.scenario.get("credit_spread_shock").copied(),
        }
    }
}

/// Stress totals, the per-position table and the scenario as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressTestResponse {
    /// Totals at currency precision.
    pub summary: StressSummary,
    /// Echo of the request scenario.
    pub scenario: BTreeMap<String, f64>,
    /// One row per position, in request order.
    pub details: Vec<StressedPosition>,
}
