//! Empirical quantiles.

use super::ensure_usable;
use crate::error::{MathError, MathResult};

/// Percentile of an unsorted sample.
///
/// `probability` is a fraction in `[0, 1]` (0.05 is the 5th percentile).
/// The sample is copied and sorted; the caller's slice is untouched.
///
/// # Example
///
/// ```
/// use bankrisk_math::statistics::percentile;
///
/// let returns = [0.03, -0.02, 0.01, -0.04, 0.0];
/// let p25 = percentile(&returns, 0.25).unwrap();
/// assert!((p25 - (-0.02)).abs() < 1e-12);
/// ```
pub fn percentile(sample: &[f64], probability: f64) -> MathResult<f64> {
    ensure_usable(sample)?;
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    percentile_sorted(&sorted, probability)
}

/// Percentile of an ascending sample, interpolating linearly between
/// the two closest order statistics.
///
/// The rank of the quantile is `probability * (n - 1)`.
pub fn percentile_sorted(sorted: &[f64], probability: f64) -> MathResult<f64> {
    if sorted.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !(0.0..=1.0).contains(&probability) {
        return Err(MathError::invalid_input(format!(
            "percentile probability {probability} outside [0, 1]"
        )));
    }

    let rank = probability * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Ok(sorted[lower]);
    }

    let weight = rank - lower as f64;
    Ok(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percentile_interpolates() {
        let sample: Vec<f64> = (1..=10).map(f64::from).collect();
        // rank = 0.05 * 9 = 0.45 -> 1 + 0.45 * (2 - 1)
        assert_relative_eq!(percentile(&sample, 0.05).unwrap(), 1.45, epsilon = 1e-12);
        // rank = 0.5 * 9 = 4.5 -> midpoint of 5 and 6
        assert_relative_eq!(percentile(&sample, 0.5).unwrap(), 5.5, epsilon = 1e-12);
    }

    #[test]
    fn test_percentile_endpoints() {
        let sample = [3.0, -1.0, 2.0];
        assert_relative_eq!(percentile(&sample, 0.0).unwrap(), -1.0);
        assert_relative_eq!(percentile(&sample, 1.0).unwrap(), 3.0);
    }

    #[test]
    fn test_percentile_single_observation() {
        assert_relative_eq!(percentile(&[-0.07], 0.01).unwrap(), -0.07);
    }

    #[test]
    fn test_percentile_leaves_input_unsorted() {
        let sample = vec![0.02, -0.01, 0.0];
        let _ = percentile(&sample, 0.5).unwrap();
        assert_eq!(sample, vec![0.02, -0.01, 0.0]);
    }

    #[test]
    fn test_percentile_rejects_bad_probability() {
        assert!(percentile(&[1.0, 2.0], 1.5).is_err());
        assert!(percentile(&[1.0, 2.0], -0.1).is_err());
        assert!(percentile(&[], 0.5).is_err());
    }
}
