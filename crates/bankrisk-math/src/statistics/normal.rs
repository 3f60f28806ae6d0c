//! Standard normal distribution helpers.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{MathError, MathResult};

/// Inverse CDF of the standard normal distribution.
///
/// `probability` must lie strictly inside `(0, 1)`; the endpoints map to
/// infinities and are rejected.
pub fn normal_quantile(probability: f64) -> MathResult<f64> {
    if !(probability > 0.0 && probability < 1.0) {
        return Err(MathError::invalid_input(format!(
            "normal quantile probability {probability} outside (0, 1)"
        )));
    }

    let standard = Normal::new(0.0, 1.0).map_err(|e| MathError::distribution(e.to_string()))?;
    Ok(standard.inverse_cdf(probability))
}
