//! Mean, dispersion and extremes of a sample.

use super::ensure_usable;
use crate::error::{MathError, MathResult};

/// Arithmetic mean of a non-empty sample.
///
/// Fails with [`MathError::Distribution`] when the sum overflows.
pub fn mean(sample: &[f64]) -> MathResult<f64> {
    ensure_usable(sample)?;
    finite("mean", sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Population standard deviation (divides by `n`).
///
/// A single observation has zero dispersion. Fails with
/// [`MathError::Distribution`] when the squared deviations overflow.
pub fn population_std_dev(sample: &[f64]) -> MathResult<f64> {
    let mu = mean(sample)?;
    let variance = sample.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / sample.len() as f64;
    finite("standard deviation", variance.sqrt())
}

fn finite(statistic: &str, value: f64) -> MathResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::distribution(format!(
            "{statistic} is not finite ({value}); sample magnitude exceeds f64 range"
        )))
    }
}

/// Largest value of a non-empty sample.
pub fn max(sample: &[f64]) -> MathResult<f64> {
    ensure_usable(sample)?;
    Ok(sample.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// First two moments and the maximum of a sample, computed in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Largest observation.
    pub max: f64,
}

impl SampleSummary {
    /// Summarizes a non-empty sample.
    pub fn from_sample(sample: &[f64]) -> MathResult<Self> {
        Ok(Self {
            count: sample.len(),
            mean: mean(sample)?,
            std_dev: population_std_dev(sample)?,
            max: max(sample)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert_relative_eq!(mean(&[-0.02]).unwrap(), -0.02);
    }

    #[test]
    fn test_population_std_dev() {
        // Population variance of 2, 4, 4, 4, 5, 5, 7, 9 is exactly 4
        let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_std_dev(&sample).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(population_std_dev(&[42.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_max() {
        assert_relative_eq!(max(&[50_000.0, 75_000.0, 120_000.0, 30_000.0]).unwrap(), 120_000.0);
    }

    #[test]
    fn test_empty_sample_rejected() {
        assert_eq!(mean(&[]), Err(MathError::insufficient_data(1, 0)));
        assert!(population_std_dev(&[]).is_err());
        assert!(max(&[]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = mean(&[1.0, f64::NAN]).unwrap_err();
        assert!(err.to_string().contains("index 1"));
        assert!(max(&[f64::INFINITY]).is_err());
    }

    #[test]
    fn test_overflowing_sample_rejected() {
        // Each value is finite but the sum is not
        let err = mean(&[1.0e308, 1.5e308]).unwrap_err();
        assert!(matches!(err, MathError::Distribution { .. }));

        // Mean is zero but the squared deviations overflow
        let err = population_std_dev(&[-1.0e308, 1.0e308]).unwrap_err();
        assert!(matches!(err, MathError::Distribution { .. }));
        assert!(SampleSummary::from_sample(&[1.0e308, 1.5e308]).is_err());
    }

    #[test]
    fn test_summary() {
        let summary = SampleSummary::from_sample(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(summary.count, 3);
        assert_relative_eq!(summary.mean, 20.0);
        assert_relative_eq!(summary.std_dev, (200.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(summary.max, 30.0);
    }
}
