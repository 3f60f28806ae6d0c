//! Parametric (variance-covariance) VaR.

use bankrisk_math::statistics::{mean, normal_quantile, population_std_dev};

use super::validate_confidence;
use crate::error::{RiskError, RiskResult};

/// Calculate parametric VaR assuming normally distributed returns.
///
/// `VaR = mean + z * std`, where `z` is the standard normal quantile at
/// `1 - confidence_level` (negative for any confidence above 50%) and
/// `std` is the population standard deviation of the sample.
pub fn parametric_var(returns: &[f64], confidence_level: f64) -> RiskResult<f64> {
    if returns.is_empty() {
        return Err(RiskError::InsufficientData(
            "no returns provided".to_string(),
        ));
    }
    validate_confidence(confidence_level)?;

    let mu = mean(returns)?;
    let sigma = population_std_dev(returns)?;
    let z = normal_quantile(1.0 - confidence_level)?;

    let var = mu + z * sigma;
    if !var.is_finite() {
        return Err(RiskError::CalculationFailed(format!(
            "parametric VaR is not finite (mean {mu}, std {sigma})"
        )));
    }
    Ok(var)
}
