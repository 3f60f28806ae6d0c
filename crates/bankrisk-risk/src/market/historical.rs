//! Historical-simulation VaR and expected shortfall.

use bankrisk_math::statistics::{mean, percentile};

use super::validate_confidence;
use crate::error::{RiskError, RiskResult};

/// Calculate historical VaR from a series of returns.
///
/// # Arguments
///
/// * `returns` - Fractional returns (e.g., -0.01 for -1%)
/// * `confidence_level` - Confidence level (e.g., 0.95 for 95%)
///
/// # Returns
///
/// The `(1 - confidence_level)` percentile of the sample. Losses are
/// negative, so a higher confidence never yields a larger VaR.
pub fn historical_var(returns: &[f64], confidence_level: f64) -> RiskResult<f64> {
    if returns.is_empty() {
        return Err(RiskError::InsufficientData(
            "no returns provided".to_string(),
        ));
    }
    validate_confidence(confidence_level)?;

    Ok(percentile(returns, 1.0 - confidence_level)?)
}

/// Calculate historical CVaR (expected shortfall).
///
/// Averages every return at or below the historical VaR. The tail always
/// holds at least the sample minimum; should it come out empty the VaR
/// itself is returned.
pub fn historical_cvar(returns: &[f64], confidence_level: f64) -> RiskResult<f64> {
    let var = historical_var(returns, confidence_level)?;

    let tail: Vec<f64> = returns.iter().copied().filter(|r| *r <= var).collect();
    if tail.is_empty() {
        return Ok(var);
    }

    Ok(mean(&tail)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_returns() -> Vec<f64> {
        vec![
            -0.02, -0.015, -0.01, -0.005, 0.0, 0.005, 0.01, 0.015, 0.02, 0.025,
        ]
    }

    #[test]
    fn test_historical_var() {
        // rank = 0.05 * 9 = 0.45 between -0.02 and -0.015
        let var = historical_var(&sample_returns(), 0.95).unwrap();
        assert_relative_eq!(var, -0.01775, epsilon = 1e-12);
    }

    #[test]
    fn test_historical_var_empty() {
        let result = historical_var(&[], 0.95);
        assert!(matches!(result, Err(RiskError::InsufficientData(_))));
    }

    #[test]
    fn test_historical_var_bad_confidence() {
        assert!(historical_var(&sample_returns(), 1.0).is_err());
        assert!(historical_var(&sample_returns(), 0.0).is_err());
    }

    #[test]
    fn test_higher_confidence_is_more_extreme() {
        let returns = sample_returns();
        let var_95 = historical_var(&returns, 0.95).unwrap();
        let var_99 = historical_var(&returns, 0.99).unwrap();
        assert!(var_99 <= var_95);
    }

    #[test]
    fn test_historical_cvar() {
        // Only -0.02 lies at or below -0.01775
        let cvar = historical_cvar(&sample_returns(), 0.95).unwrap();
        assert_relative_eq!(cvar, -0.02, epsilon = 1e-12);

        // At 80%: rank 1.8 -> -0.015 + 0.8 * 0.005 = -0.011; tail {-0.02, -0.015}
        let cvar_80 = historical_cvar(&sample_returns(), 0.80).unwrap();
        assert_relative_eq!(cvar_80, -0.0175, epsilon = 1e-12);
    }

    #[test]
    fn test_cvar_not_above_var() {
        let returns = sample_returns();
        for confidence in [0.8, 0.9, 0.95, 0.99] {
            let var = historical_var(&returns, confidence).unwrap();
            let cvar = historical_cvar(&returns, confidence).unwrap();
            assert!(cvar <= var, "cvar {cvar} > var {var} at {confidence}");
        }
    }

    #[test]
    fn test_degenerate_sample() {
        let flat = vec![0.01; 5];
        assert_relative_eq!(historical_var(&flat, 0.95).unwrap(), 0.01, epsilon = 1e-15);
        assert_relative_eq!(historical_cvar(&flat, 0.95).unwrap(), 0.01, epsilon = 1e-15);
    }
}
