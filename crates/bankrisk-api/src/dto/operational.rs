//! Operational risk DTOs.

use bankrisk_risk::operational::{LossEvent, OperationalRiskCapital};
use serde::{Deserialize, Serialize};

/// Operational risk request; `loss_events` must not be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalRiskRequest {
    /// Historical losses.
    #[serde(default)]
    pub loss_events: Vec<LossEvent>,
}

/// Operational capital figures at currency precision.
pub type OperationalRiskResponse = OperationalRiskCapital;
