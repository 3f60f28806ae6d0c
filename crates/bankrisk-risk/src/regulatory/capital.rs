//! Basel capital ratios and minimum requirements.

use serde::{Deserialize, Serialize};

/// Share of Tier 1 capital treated as CET1.
pub const CET1_SHARE_OF_TIER1: f64 = 0.9;

/// Scalar applied to total RWA as the leverage exposure proxy.
pub const LEVERAGE_EXPOSURE_SCALAR: f64 = 0.03;

/// Capital ratios against risk-weighted assets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CapitalRatios {
    /// `0.9 * tier1 / total_rwa`.
    pub cet1_ratio: f64,
    /// `tier1 / total_rwa`.
    pub tier1_ratio: f64,
    /// `(tier1 + tier2) / total_rwa`.
    pub total_capital_ratio: f64,
    /// `tier1 / (total_rwa * 0.03)`.
    pub leverage_ratio: f64,
}

impl CapitalRatios {
    /// Computes the ratios. Everything is zero when `total_rwa <= 0`.
    pub fn compute(tier1_capital: f64, tier2_capital: f64, total_rwa: f64) -> Self {
        if total_rwa <= 0.0 {
            return Self::default();
        }

        Self {
            cet1_ratio: CET1_SHARE_OF_TIER1 * tier1_capital / total_rwa,
            tier1_ratio: tier1_capital / total_rwa,
            total_capital_ratio: (tier1_capital + tier2_capital) / total_rwa,
            leverage_ratio: tier1_capital / (total_rwa * LEVERAGE_EXPOSURE_SCALAR),
        }
    }
}

/// Minimum ratios a bank must hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapitalRequirements {
    /// Minimum CET1 ratio.
    #[serde(default = "default_cet1_minimum")]
    pub cet1_minimum: f64,
    /// Minimum Tier 1 ratio.
    #[serde(default = "default_tier1_minimum")]
    pub tier1_minimum: f64,
    /// Minimum total capital ratio.
    #[serde(default = "default_total_capital_minimum")]
    pub total_capital_minimum: f64,
}

fn default_cet1_minimum() -> f64 {
    0.045
}

fn default_tier1_minimum() -> f64 {
    0.06
}

fn default_total_capital_minimum() -> f64 {
    0.08
}

impl Default for CapitalRequirements {
    fn default() -> Self {
        Self::basel_iii()
    }
}

impl CapitalRequirements {
    /// Basel III Pillar 1 minimums (4.5% / 6% / 8%).
    pub fn basel_iii() -> Self {
        Self {
            cet1_minimum: default_cet1_minimum(),
            tier1_minimum: default_tier1_minimum(),
            total_capital_minimum: default_total_capital_minimum(),
        }
    }

    /// Compares ratios against the minimums. A ratio equal to its minimum
    /// passes.
    pub fn check(&self, ratios: &CapitalRatios) -> ComplianceCheck {
        ComplianceCheck {
            cet1_compliant: ratios.cet1_ratio >= self.cet1_minimum,
            tier1_compliant: ratios.tier1_ratio >= self.tier1_minimum,
            total_capital_compliant: ratios.total_capital_ratio >= self.total_capital_minimum,
        }
    }
}

/// Outcome of a compliance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    /// CET1 ratio meets its minimum.
    pub cet1_compliant: bool,
    /// Tier 1 ratio meets its minimum.
    pub tier1_compliant: bool,
    /// Total capital ratio meets its minimum.
    pub total_capital_compliant: bool,
}

impl ComplianceCheck {
    /// True when every ratio meets its minimum.
    pub fn is_compliant(&self) -> bool {
        self.cet1_compliant && self.tier1_compliant && self.total_capital_compliant
    }
}
