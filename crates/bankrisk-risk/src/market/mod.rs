//! Market risk: Value at Risk and Conditional VaR.
//!
//! VaR estimates the return threshold that is not undercut with
//! probability equal to the confidence level. Returns are fractional and
//! losses negative, so VaR and CVaR are typically negative numbers.

mod historical;
mod monte_carlo;
mod parametric;

pub use historical::{historical_cvar, historical_var};
pub use monte_carlo::{monte_carlo_var, simulate_returns, DEFAULT_SIMULATIONS};
pub use parametric::parametric_var;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RiskError, RiskResult};

/// Default confidence level (95%).
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// VaR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarMethod {
    /// Historical simulation
    Historical,
    /// Parametric (variance-covariance)
    Parametric,
    /// Monte Carlo simulation
    MonteCarlo,
}

impl VarMethod {
    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Historical => "historical",
            Self::Parametric => "parametric",
            Self::MonteCarlo => "monte_carlo",
        }
    }
}

impl fmt::Display for VarMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VarMethod {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "historical" => Ok(Self::Historical),
            "parametric" => Ok(Self::Parametric),
            "monte_carlo" => Ok(Self::MonteCarlo),
            other => Err(RiskError::UnknownMethod(other.to_string())),
        }
    }
}

/// Fails unless the confidence level lies strictly inside (0, 1).
pub(crate) fn validate_confidence(confidence_level: f64) -> RiskResult<()> {
    if confidence_level > 0.0 && confidence_level < 1.0 {
        Ok(())
    } else {
        Err(RiskError::InvalidInput(format!(
            "confidence level must be between 0 and 1, got {confidence_level}"
        )))
    }
}

/// Calculator for VaR and CVaR at a fixed confidence level.
///
/// The confidence level, Monte Carlo sample size and optional seed are set
/// at construction and never change afterwards, so one instance can be
/// shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketRiskCalculator {
    confidence_level: f64,
    simulations: usize,
    seed: Option<u64>,
}

impl Default for MarketRiskCalculator {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            simulations: DEFAULT_SIMULATIONS,
            seed: None,
        }
    }
}

impl MarketRiskCalculator {
    /// Creates a calculator at the given confidence level.
    pub fn new(confidence_level: f64) -> RiskResult<Self> {
        validate_confidence(confidence_level)?;
        Ok(Self {
            confidence_level,
            ..Self::default()
        })
    }

    /// Sets the number of Monte Carlo draws.
    pub fn with_simulations(mut self, simulations: usize) -> RiskResult<Self> {
        if simulations == 0 {
            return Err(RiskError::InvalidInput(
                "number of simulations must be positive".to_string(),
            ));
        }
        self.simulations = simulations;
        Ok(self)
    }

    /// Seeds the Monte Carlo generator for reproducible runs.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the confidence level.
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Returns the number of Monte Carlo draws.
    pub fn simulations(&self) -> usize {
        self.simulations
    }

    /// Returns the Monte Carlo seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// VaR by the requested method.
    ///
    /// Monte Carlo draws from a generator seeded with the configured seed,
    /// or from OS entropy when none is configured.
    pub fn calculate_var(&self, returns: &[f64], method: VarMethod) -> RiskResult<f64> {
        let var = match method {
            VarMethod::Historical => historical_var(returns, self.confidence_level)?,
            VarMethod::Parametric => parametric_var(returns, self.confidence_level)?,
            VarMethod::MonteCarlo => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                self.monte_carlo_var_with_rng(returns, &mut rng)?
            }
        };

        debug!(
            method = %method,
            confidence_level = self.confidence_level,
            sample_size = returns.len(),
            var,
            "VaR calculated"
        );
        Ok(var)
    }

    /// VaR for a method given by name; unknown names are rejected.
    pub fn calculate_var_by_name(&self, returns: &[f64], method: &str) -> RiskResult<f64> {
        self.calculate_var(returns, method.parse()?)
    }

    /// Monte Carlo VaR drawing from the supplied generator.
    pub fn monte_carlo_var_with_rng<R: Rng + ?Sized>(
        &self,
        returns: &[f64],
        rng: &mut R,
    ) -> RiskResult<f64> {
        monte_carlo_var(returns, self.confidence_level, self.simulations, rng)
    }

    /// Historical CVaR (expected shortfall).
    pub fn calculate_cvar(&self, returns: &[f64]) -> RiskResult<f64> {
        historical_cvar(returns, self.confidence_level)
    }
}
