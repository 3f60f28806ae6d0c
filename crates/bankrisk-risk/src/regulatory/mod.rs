//! Basel regulatory aggregates: risk-weighted assets and capital ratios.
//!
//! # Example
//!
//! ```rust
//! use bankrisk_risk::regulatory::{ExposureRow, ExposureType, RegulatoryReporting};
//!
//! let reporting = RegulatoryReporting::default();
//! let rows = reporting
//!     .calculate_rwa(&[ExposureRow::new(ExposureType::Retail, 500_000.0)])
//!     .unwrap();
//! assert_eq!(rows[0].rwa, 375_000.0);
//! ```

mod capital;
mod risk_weights;
mod rwa;

pub use capital::{
    CapitalRatios, CapitalRequirements, ComplianceCheck, CET1_SHARE_OF_TIER1,
    LEVERAGE_EXPOSURE_SCALAR,
};
pub use risk_weights::{ExposureType, RiskWeightTable, DEFAULT_RISK_WEIGHT};
pub use rwa::{ExposureRow, RwaRow, RwaSummary, IRB_SCALAR};

use tracing::debug;

use crate::error::{require_finite, require_non_negative, require_unit_interval, RiskError, RiskResult};

/// RWA and capital-ratio reporting over an injected risk-weight table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegulatoryReporting {
    risk_weights: RiskWeightTable,
}

impl RegulatoryReporting {
    /// Creates a reporter using the given weight table.
    pub fn new(risk_weights: RiskWeightTable) -> Self {
        Self { risk_weights }
    }

    /// Returns the weight table.
    pub fn risk_weights(&self) -> &RiskWeightTable {
        &self.risk_weights
    }

    /// Risk-weights every exposure.
    ///
    /// Output rows follow input order. `rwa_irb` is filled for rows carrying
    /// both `pd` and `lgd`.
    ///
    /// # Errors
    ///
    /// Rejects negative amounts and PD/LGD values outside [0, 1], naming the
    /// offending row.
    pub fn calculate_rwa(&self, exposures: &[ExposureRow]) -> RiskResult<Vec<RwaRow>> {
        let rows = exposures
            .iter()
            .enumerate()
            .map(|(i, row)| self.weigh(row).map_err(|e| at_row(i, e)))
            .collect::<RiskResult<Vec<_>>>()?;

        debug!(rows = rows.len(), "RWA calculated");
        Ok(rows)
    }

    fn weigh(&self, row: &ExposureRow) -> RiskResult<RwaRow> {
        let amount = require_non_negative("amount", row.amount)?;
        let pd = row.pd.map(|pd| require_unit_interval("pd", pd)).transpose()?;
        let lgd = row.lgd.map(|lgd| require_unit_interval("lgd", lgd)).transpose()?;

        let risk_weight = self.risk_weights.weight_for(&row.exposure_type);
        let rwa_irb = match (pd, lgd) {
            (Some(pd), Some(lgd)) => Some(amount * pd * lgd * IRB_SCALAR),
            _ => None,
        };

        Ok(RwaRow {
            exposure: row.clone(),
            risk_weight,
            rwa: amount * risk_weight,
            rwa_irb,
        })
    }

    /// Computes RWA rows and their portfolio totals.
    pub fn summarize_rwa(&self, exposures: &[ExposureRow]) -> RiskResult<(RwaSummary, Vec<RwaRow>)> {
        let rows = self.calculate_rwa(exposures)?;
        Ok((RwaSummary::from_rows(&rows), rows))
    }

    /// Capital ratios for a capital snapshot.
    ///
    /// # Errors
    ///
    /// Rejects negative or non-finite capital and a non-finite RWA. A
    /// non-positive RWA yields all-zero ratios.
    pub fn calculate_capital_ratios(
        &self,
        tier1_capital: f64,
        tier2_capital: f64,
        total_rwa: f64,
    ) -> RiskResult<CapitalRatios> {
        require_non_negative("tier1_capital", tier1_capital)?;
        require_non_negative("tier2_capital", tier2_capital)?;
        require_finite("total_rwa", total_rwa)?;

        Ok(CapitalRatios::compute(tier1_capital, tier2_capital, total_rwa))
    }
}

fn at_row(index: usize, err: RiskError) -> RiskError {
    match err {
        RiskError::InvalidInput(msg) => RiskError::InvalidInput(format!("exposure {index}: {msg}")),
        other => other,
    }
}
