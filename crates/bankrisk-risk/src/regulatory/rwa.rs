//! Risk-weighted asset rows.

use serde::{Deserialize, Serialize};

use super::risk_weights::ExposureType;

/// Inverse of the 8% minimum capital ratio, turning capital into RWA.
pub const IRB_SCALAR: f64 = 12.5;

/// One exposure of a regulatory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureRow {
    /// Regulatory class.
    pub exposure_type: ExposureType,
    /// Exposure amount.
    pub amount: f64,
    /// Modelled probability of default, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pd: Option<f64>,
    /// Modelled loss given default, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lgd: Option<f64>,
}

impl ExposureRow {
    /// Creates a row without PD/LGD.
    pub fn new(exposure_type: impl Into<ExposureType>, amount: f64) -> Self {
        Self {
            exposure_type: exposure_type.into(),
            amount,
            pd: None,
            lgd: None,
        }
    }

    /// Attaches modelled PD and LGD.
    pub fn with_pd_lgd(mut self, pd: f64, lgd: f64) -> Self {
        self.pd = Some(pd);
        self.lgd = Some(lgd);
        self
    }
}

/// An exposure row with its risk weight and RWA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RwaRow {
    /// The input row.
    #[serde(flatten)]
    pub exposure: ExposureRow,
    /// Standardised risk weight.
    pub risk_weight: f64,
    /// `amount * risk_weight`.
    pub rwa: f64,
    /// `amount * pd * lgd * 12.5` when the row carries PD and LGD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rwa_irb: Option<f64>,
}

/// Portfolio totals of an RWA table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RwaSummary {
    /// Sum of exposure amounts.
    pub total_exposure: f64,
    /// Sum of standardised RWA.
    pub total_rwa: f64,
    /// `total_rwa / total_exposure`, zero for a zero exposure.
    pub average_risk_weight: f64,
}

impl RwaSummary {
    /// Aggregates a computed RWA table.
    pub fn from_rows(rows: &[RwaRow]) -> Self {
        let total_exposure: f64 = rows.iter().map(|r| r.exposure.amount).sum();
        let total_rwa: f64 = rows.iter().map(|r| r.rwa).sum();
        let average_risk_weight = if total_exposure > 0.0 {
            total_rwa / total_exposure
        } else {
            0.0
        };

        Self {
            total_exposure,
            total_rwa,
            average_risk_weight,
        }
    }
}
