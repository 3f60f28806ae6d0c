//! Exposure classes and standardised risk weights.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{require_non_negative, RiskResult};

/// Risk weight applied to exposure classes missing from the table.
pub const DEFAULT_RISK_WEIGHT: f64 = 1.0;

/// Regulatory exposure class.
///
/// Unrecognised classes are kept verbatim in [`ExposureType::Other`] and
/// weighted with the table default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExposureType {
    /// Central governments and central banks.
    Sovereign,
    /// Credit institutions.
    Bank,
    /// Non-financial corporates.
    Corporate,
    /// Retail portfolios.
    Retail,
    /// Loans secured by residential property.
    ResidentialMortgage,
    /// Loans secured by commercial property.
    CommercialRealEstate,
    /// Any other class.
    Other(String),
}

impl ExposureType {
    /// Wire name of the class.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sovereign => "sovereign",
            Self::Bank => "bank",
            Self::Corporate => "corporate",
            Self::Retail => "retail",
            Self::ResidentialMortgage => "residential_mortgage",
            Self::CommercialRealEstate => "commercial_real_estate",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for ExposureType {
    fn from(s: &str) -> Self {
        match s {
            "sovereign" => Self::Sovereign,
            "bank" => Self::Bank,
            "corporate" => Self::Corporate,
            "retail" => Self::Retail,
            "residential_mortgage" => Self::ResidentialMortgage,
            "commercial_real_estate" => Self::CommercialRealEstate,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ExposureType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<ExposureType> for String {
    fn from(t: ExposureType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for ExposureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable lookup from exposure class to risk weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskWeightTable {
    /// Weight per exposure class name.
    #[serde(default = "basel_weights")]
    pub weights: BTreeMap<String, f64>,
    /// Weight for classes not in `weights`.
    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

fn basel_weights() -> BTreeMap<String, f64> {
    [
        (ExposureType::Sovereign, 0.0),
        (ExposureType::Bank, 0.2),
        (ExposureType::Corporate, 1.0),
        (ExposureType::Retail, 0.75),
        (ExposureType::ResidentialMortgage, 0.35),
        (ExposureType::CommercialRealEstate, 1.0),
    ]
    .into_iter()
    .map(|(class, weight)| (class.as_str().to_string(), weight))
    .collect()
}

fn default_weight() -> f64 {
    DEFAULT_RISK_WEIGHT
}

impl Default for RiskWeightTable {
    fn default() -> Self {
        Self::basel_standardised()
    }
}

impl RiskWeightTable {
    /// Basel standardised-approach weights.
    pub fn basel_standardised() -> Self {
        Self {
            weights: basel_weights(),
            default_weight: DEFAULT_RISK_WEIGHT,
        }
    }

    /// Adds or replaces the weight of one class.
    pub fn with_weight(mut self, exposure_type: ExposureType, weight: f64) -> RiskResult<Self> {
        require_non_negative("risk weight", weight)?;
        self.weights.insert(exposure_type.as_str().to_string(), weight);
        Ok(self)
    }

    /// Weight for an exposure class, falling back to the default weight.
    pub fn weight_for(&self, exposure_type: &ExposureType) -> f64 {
        self.weights
            .get(exposure_type.as_str())
            .copied()
            .unwrap_or(self.default_weight)
    }
}
