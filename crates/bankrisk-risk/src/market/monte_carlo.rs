//! Monte Carlo VaR.

use bankrisk_math::statistics::{mean, population_std_dev};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::historical::historical_var;
use super::validate_confidence;
use crate::error::{RiskError, RiskResult};

/// Default number of simulated returns.
pub const DEFAULT_SIMULATIONS: usize = 10_000;

/// Draws `simulations` returns from a normal distribution fitted to the
/// sample mean and population standard deviation.
pub fn simulate_returns<R: Rng + ?Sized>(
    returns: &[f64],
    simulations: usize,
    rng: &mut R,
) -> RiskResult<Vec<f64>> {
    if returns.is_empty() {
        return Err(RiskError::InsufficientData(
            "no returns provided".to_string(),
        ));
    }
    if simulations == 0 {
        return Err(RiskError::InvalidInput(
            "number of simulations must be positive".to_string(),
        ));
    }

    let mu = mean(returns)?;
    let sigma = population_std_dev(returns)?;
    let normal =
        Normal::new(mu, sigma).map_err(|e| RiskError::CalculationFailed(e.to_string()))?;

    Ok((0..simulations).map(|_| normal.sample(rng)).collect())
}

/// Calculate Monte Carlo VaR: historical VaR of the simulated sample.
///
/// The random source is supplied by the caller so runs can be reproduced
/// with a seeded generator.
pub fn monte_carlo_var<R: Rng + ?Sized>(
    returns: &[f64],
    confidence_level: f64,
    simulations: usize,
    rng: &mut R,
) -> RiskResult<f64> {
    validate_confidence(confidence_level)?;
    let simulated = simulate_returns(returns, simulations, rng)?;
    historical_var(&simulated, confidence_level)
}
