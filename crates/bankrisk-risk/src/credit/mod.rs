//! Credit risk: PD, LGD, EAD and expected loss.
//!
//! # Example
//!
//! ```
//! use bankrisk_risk::credit::CreditRiskCalculator;
//!
//! let calc = CreditRiskCalculator::default();
//! let pd = calc.calculate_pd(650.0, 0.4, 1).unwrap();
//! let lgd = calc.calculate_lgd(200_000.0, 250_000.0).unwrap();
//! let ead = calc.calculate_ead(50_000.0, 100_000.0).unwrap();
//! let el = calc.calculate_expected_loss(pd, lgd, ead);
//! assert!(el > 0.0 && el < ead);
//! ```

mod model;

pub use model::PdModel;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{
    require_finite, require_non_negative, require_unit_interval, RiskError, RiskResult,
};

/// Lowest PD the calculator reports (0.01%).
pub const PD_FLOOR: f64 = 0.0001;

/// Highest PD the calculator reports (99.99%).
pub const PD_CAP: f64 = 0.9999;

/// PD historically substituted when a score could not be computed.
///
/// The calculator never applies it on its own; callers that accept a
/// default write `calc.calculate_pd(..).unwrap_or(DEFAULT_PD)`.
pub const DEFAULT_PD: f64 = 0.05;

/// Recovery rate applied to the unsecured part of an exposure.
pub const DEFAULT_RECOVERY_RATE: f64 = 0.4;

/// Share of the unused limit expected to be drawn before default.
pub const DEFAULT_UTILIZATION_RATE: f64 = 0.75;

/// Loss rate on the collateralised part of an exposure (80% recovery).
pub const SECURED_LOSS_RATE: f64 = 0.2;

/// Valid range of a credit score.
pub const CREDIT_SCORE_RANGE: (f64, f64) = (300.0, 850.0);

/// Borrower characteristics consumed by the PD model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorrowerProfile {
    /// Bureau score in [300, 850].
    pub credit_score: f64,
    /// Debt-to-income ratio.
    pub debt_ratio: f64,
    /// Number of past delinquencies.
    pub delinquency_count: u32,
}

/// Facility data consumed by the LGD and EAD formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditFacility {
    /// Market value of pledged collateral.
    pub collateral_value: f64,
    /// Exposure used for the LGD split.
    pub exposure: f64,
    /// Drawn balance.
    pub current_balance: f64,
    /// Committed limit.
    pub credit_limit: f64,
}

/// The four credit metrics for one borrower and facility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditRiskMetrics {
    /// Probability of default.
    pub probability_of_default: f64,
    /// Loss given default as a fraction of exposure.
    pub loss_given_default: f64,
    /// Exposure at default in currency units.
    pub exposure_at_default: f64,
    /// PD x LGD x EAD.
    pub expected_loss: f64,
}

/// Calculator for PD, LGD, EAD and EL.
///
/// Holds an immutable [`PdModel`] plus the recovery and utilization rates
/// used by the two-argument LGD/EAD methods.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditRiskCalculator {
    model: PdModel,
    recovery_rate: f64,
    utilization_rate: f64,
}

impl Default for CreditRiskCalculator {
    fn default() -> Self {
        Self {
            model: PdModel::standard(),
            recovery_rate: DEFAULT_RECOVERY_RATE,
            utilization_rate: DEFAULT_UTILIZATION_RATE,
        }
    }
}

impl CreditRiskCalculator {
    /// Creates a calculator with the given PD model and default rates.
    pub fn new(model: PdModel) -> RiskResult<Self> {
        if !model.is_finite() {
            return Err(RiskError::InvalidInput(
                "PD model coefficients must be finite".to_string(),
            ));
        }
        Ok(Self {
            model,
            ..Self::default()
        })
    }

    /// Sets the default recovery rate on unsecured exposure.
    pub fn with_recovery_rate(mut self, recovery_rate: f64) -> RiskResult<Self> {
        self.recovery_rate = require_unit_interval("recovery_rate", recovery_rate)?;
        Ok(self)
    }

    /// Sets the default drawdown share of the unused limit.
    pub fn with_utilization_rate(mut self, utilization_rate: f64) -> RiskResult<Self> {
        self.utilization_rate = require_unit_interval("utilization_rate", utilization_rate)?;
        Ok(self)
    }

    /// Returns the PD model.
    pub fn model(&self) -> &PdModel {
        &self.model
    }

    /// Returns the default recovery rate.
    pub fn recovery_rate(&self) -> f64 {
        self.recovery_rate
    }

    /// Returns the default utilization rate.
    pub fn utilization_rate(&self) -> f64 {
        self.utilization_rate
    }

    /// Probability of default, clamped to [`PD_FLOOR`], [`PD_CAP`].
    ///
    /// # Errors
    ///
    /// Rejects scores outside [300, 850] and negative or non-finite debt
    /// ratios. A non-finite model output is reported as
    /// [`RiskError::CalculationFailed`]; no default is substituted.
    pub fn calculate_pd(
        &self,
        credit_score: f64,
        debt_ratio: f64,
        delinquency_count: u32,
    ) -> RiskResult<f64> {
        require_finite("credit_score", credit_score)?;
        let (low, high) = CREDIT_SCORE_RANGE;
        if !(low..=high).contains(&credit_score) {
            return Err(RiskError::InvalidInput(format!(
                "credit_score must be between {low} and {high}, got {credit_score}"
            )));
        }
        require_non_negative("debt_ratio", debt_ratio)?;

        let pd = self
            .model
            .probability(credit_score, debt_ratio, delinquency_count);
        if !pd.is_finite() {
            return Err(RiskError::CalculationFailed(format!(
                "PD model produced {pd} for score {credit_score}"
            )));
        }

        let pd = pd.clamp(PD_FLOOR, PD_CAP);
        debug!(credit_score, debt_ratio, delinquency_count, pd, "PD calculated");
        Ok(pd)
    }

    /// Loss given default using the configured recovery rate.
    pub fn calculate_lgd(&self, collateral_value: f64, exposure: f64) -> RiskResult<f64> {
        self.calculate_lgd_with_recovery(collateral_value, exposure, self.recovery_rate)
    }

    /// Loss given default with an explicit recovery rate.
    ///
    /// The collateralised part of the exposure loses [`SECURED_LOSS_RATE`],
    /// the remainder loses `1 - recovery_rate`. Returns 0 for a
    /// non-positive exposure.
    pub fn calculate_lgd_with_recovery(
        &self,
        collateral_value: f64,
        exposure: f64,
        recovery_rate: f64,
    ) -> RiskResult<f64> {
        require_non_negative("collateral_value", collateral_value)?;
        require_finite("exposure", exposure)?;
        require_unit_interval("recovery_rate", recovery_rate)?;

        if exposure <= 0.0 {
            return Ok(0.0);
        }

        let unsecured = (exposure - collateral_value).max(0.0);
        let secured = exposure.min(collateral_value);
        let expected_loss = unsecured * (1.0 - recovery_rate) + secured * SECURED_LOSS_RATE;

        Ok((expected_loss / exposure).clamp(0.0, 1.0))
    }

    /// Exposure at default using the configured utilization rate.
    pub fn calculate_ead(&self, current_balance: f64, credit_limit: f64) -> RiskResult<f64> {
        self.calculate_ead_with_utilization(current_balance, credit_limit, self.utilization_rate)
    }

    /// Exposure at default with an explicit utilization rate.
    ///
    /// `EAD = balance + (limit - balance) * utilization`, floored at zero.
    /// A limit below the balance shrinks EAD instead of failing.
    pub fn calculate_ead_with_utilization(
        &self,
        current_balance: f64,
        credit_limit: f64,
        utilization_rate: f64,
    ) -> RiskResult<f64> {
        require_non_negative("current_balance", current_balance)?;
        require_non_negative("credit_limit", credit_limit)?;
        require_unit_interval("utilization_rate", utilization_rate)?;

        let unused_limit = credit_limit - current_balance;
        let ead = current_balance + unused_limit * utilization_rate;
        Ok(ead.max(0.0))
    }

    /// Expected loss, `pd * lgd * ead`. Inputs are taken as already validated.
    pub fn calculate_expected_loss(&self, pd: f64, lgd: f64, ead: f64) -> f64 {
        pd * lgd * ead
    }

    /// Computes all four metrics for a borrower and facility.
    pub fn assess(
        &self,
        borrower: &BorrowerProfile,
        facility: &CreditFacility,
    ) -> RiskResult<CreditRiskMetrics> {
        let pd = self.calculate_pd(
            borrower.credit_score,
            borrower.debt_ratio,
            borrower.delinquency_count,
        )?;
        let lgd = self.calculate_lgd(facility.collateral_value, facility.exposure)?;
        let ead = self.calculate_ead(facility.current_balance, facility.credit_limit)?;

        Ok(CreditRiskMetrics {
            probability_of_default: pd,
            loss_given_default: lgd,
            exposure_at_default: ead,
            expected_loss: self.calculate_expected_loss(pd, lgd, ead),
        })
    }
}
