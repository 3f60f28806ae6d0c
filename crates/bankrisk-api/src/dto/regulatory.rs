//! Regulatory reporting DTOs.

use bankrisk_risk::regulatory::{
    CapitalRatios, CapitalRequirements, ComplianceCheck, ExposureRow, RwaRow, RwaSummary,
};
use serde::{Deserialize, Serialize};

/// RWA request; `exposures` must not be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RwaRequest {
    /// Exposure table.
    #[serde(default)]
    pub exposures: Vec<ExposureRow>,
}

/// RWA totals plus the per-exposure table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RwaResponse {
    /// Totals; amounts at currency precision, average weight at ratio precision.
    pub summary: RwaSummary,
    /// One row per exposure, in request order.
    pub details: Vec<RwaRow>,
}

/// Capital snapshot. Missing figures default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CapitalRatiosRequest {
    /// Tier 1 capital.
    #[serde(default)]
    pub tier1_capital: f64,
    /// Tier 2 capital.
    #[serde(default)]
    pub tier2_capital: f64,
    /// Total risk-weighted assets.
    #[serde(default)]
    pub total_rwa: f64,
}

/// Ratios, the minimums they were checked against and the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapitalRatiosResponse {
    /// Ratios at ratio precision.
    pub ratios: CapitalRatios,
    /// Configured minimums.
    pub requirements: CapitalRequirements,
    /// Checked on unrounded ratios.
    pub compliance: ComplianceCheck,
}
