//! Error types for risk calculations.

use bankrisk_math::MathError;
use thiserror::Error;

/// A specialized Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskError {
    /// Invalid input parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for calculation
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// VaR estimation method not recognised
    #[error("unknown VaR method: {0} (expected historical, parametric or monte_carlo)")]
    UnknownMethod(String),

    /// Calculation failed
    #[error("calculation failed: {0}")]
    CalculationFailed(String),

    /// Statistical primitive failed
    #[error(transparent)]
    Math(#[from] MathError),
}

impl RiskError {
    /// Returns true when the error was caused by the caller's input rather
    /// than by the computation itself.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::InvalidInput(_) | Self::InsufficientData(_) | Self::UnknownMethod(_) => true,
            Self::CalculationFailed(_) => false,
            Self::Math(inner) => !matches!(inner, MathError::Distribution { .. }),
        }
    }
}

/// Fails with [`RiskError::InvalidInput`] unless `value` is finite.
pub(crate) fn require_finite(name: &str, value: f64) -> RiskResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RiskError::InvalidInput(format!("{name} must be finite, got {value}")))
    }
}

/// Fails unless `value` is finite and not negative.
pub(crate) fn require_non_negative(name: &str, value: f64) -> RiskResult<f64> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(RiskError::InvalidInput(format!(
            "{name} must be non-negative, got {value}"
        )));
    }
    Ok(value)
}

/// Fails unless `value` lies in the closed unit interval.
pub(crate) fn require_unit_interval(name: &str, value: f64) -> RiskResult<f64> {
    require_finite(name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(RiskError::InvalidInput(format!(
            "{name} must be between 0 and 1, got {value}"
        )));
    }
    Ok(value)
}
