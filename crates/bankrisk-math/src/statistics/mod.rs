//! Sample statistics used across the risk calculators.
//!
//! All functions take borrowed slices and never reorder the caller's data.

mod descriptive;
mod normal;
mod quantile;

pub use descriptive::{max, mean, population_std_dev, SampleSummary};
pub use normal::normal_quantile;
pub use quantile::{percentile, percentile_sorted};

use crate::error::{MathError, MathResult};

/// Rejects empty samples and samples containing NaN or infinities.
pub(crate) fn ensure_usable(sample: &[f64]) -> MathResult<()> {
    if sample.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if let Some(pos) = sample.iter().position(|x| !x.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "non-finite value {} at index {}",
            sample[pos], pos
        )));
    }
    Ok(())
}
