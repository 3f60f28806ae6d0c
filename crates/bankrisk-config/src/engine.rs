//! Engine configuration sections.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use bankrisk_risk::credit::{
    CreditRiskCalculator, PdModel, DEFAULT_RECOVERY_RATE, DEFAULT_UTILIZATION_RATE,
};
use bankrisk_risk::market::{MarketRiskCalculator, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_SIMULATIONS};
use bankrisk_risk::operational::{OperationalRiskCalculator, DEFAULT_CAPITAL_MULTIPLIER};
use bankrisk_risk::regulatory::{CapitalRequirements, RegulatoryReporting, RiskWeightTable};
use bankrisk_risk::stress::{StressTestEngine, DEFAULT_DURATION};

use crate::error::{
    check_non_negative, check_unit_interval, ConfigError, ConfigResult, Validate, ValidationError,
};

/// Largest number of decimal places accepted for reported figures.
pub const MAX_PRECISION: u32 = 10;

// =============================================================================
// ENGINE CONFIGURATION
// =============================================================================

/// Complete engine configuration.
///
/// Every field carries a serde default, so a TOML file only has to name the
/// settings it changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Credit risk settings.
    #[serde(default)]
    pub credit: CreditConfig,
    /// Market risk settings.
    #[serde(default)]
    pub market: MarketConfig,
    /// Operational risk settings.
    #[serde(default)]
    pub operational: OperationalConfig,
    /// Regulatory reporting settings.
    #[serde(default)]
    pub regulatory: RegulatoryConfig,
    /// Stress test settings.
    #[serde(default)]
    pub stress: StressConfig,
    /// Rounding of reported figures.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

impl EngineConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "engine configuration loaded");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.credit.validate();
        errors.extend(self.market.validate());
        errors.extend(self.operational.validate());
        errors.extend(self.regulatory.validate());
        errors.extend(self.stress.validate());
        errors.extend(self.reporting.validate());
        errors
    }
}

// =============================================================================
// CREDIT
// =============================================================================

/// Credit risk settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditConfig {
    /// Logistic PD model coefficients.
    #[serde(default)]
    pub pd_model: PdModel,

    /// Recovery rate on unsecured exposure.
    #[serde(default = "default_recovery_rate")]
    pub recovery_rate: f64,

    /// Share of the unused limit drawn before default.
    #[serde(default = "default_utilization_rate")]
    pub utilization_rate: f64,
}

fn default_recovery_rate() -> f64 {
    DEFAULT_RECOVERY_RATE
}

fn default_utilization_rate() -> f64 {
    DEFAULT_UTILIZATION_RATE
}

impl Default for CreditConfig {
    fn default() -> Self {
        Self {
            pd_model: PdModel::standard(),
            recovery_rate: default_recovery_rate(),
            utilization_rate: default_utilization_rate(),
        }
    }
}

impl CreditConfig {
    /// Builds the configured calculator.
    pub fn build(&self) -> ConfigResult<CreditRiskCalculator> {
        Ok(CreditRiskCalculator::new(self.pd_model)?
            .with_recovery_rate(self.recovery_rate)?
            .with_utilization_rate(self.utilization_rate)?)
    }
}

impl Validate for CreditConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.pd_model.is_finite() {
            errors.push(ValidationError::new(
                "credit.pd_model",
                "PD model coefficients must be finite",
            ));
        }
        check_unit_interval(&mut errors, "credit.recovery_rate", self.recovery_rate);
        check_unit_interval(&mut errors, "credit.utilization_rate", self.utilization_rate);

        errors
    }
}

// =============================================================================
// MARKET
// =============================================================================

/// Market risk settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Default VaR confidence level.
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,

    /// Number of Monte Carlo draws.
    #[serde(default = "default_monte_carlo_paths")]
    pub monte_carlo_paths: usize,

    /// Seed for reproducible Monte Carlo runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monte_carlo_seed: Option<u64>,
}

fn default_confidence_level() -> f64 {
    DEFAULT_CONFIDENCE_LEVEL
}

fn default_monte_carlo_paths() -> usize {
    DEFAULT_SIMULATIONS
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            confidence_level: default_confidence_level(),
            monte_carlo_paths: default_monte_carlo_paths(),
            monte_carlo_seed: None,
        }
    }
}

impl MarketConfig {
    /// Builds a calculator at `confidence_level`, or the configured level
    /// when `None`. A per-call seed wins over the configured one.
    pub fn build(
        &self,
        confidence_level: Option<f64>,
        seed: Option<u64>,
    ) -> ConfigResult<MarketRiskCalculator> {
        let confidence = confidence_level.unwrap_or(self.confidence_level);
        Ok(MarketRiskCalculator::new(confidence)?
            .with_simulations(self.monte_carlo_paths)?
            .with_seed(seed.or(self.monte_carlo_seed)))
    }
}

impl Validate for MarketConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            errors.push(ValidationError::with_rule(
                "market.confidence_level",
                format!(
                    "{} must be strictly between 0 and 1",
                    self.confidence_level
                ),
                "open_unit_interval",
            ));
        }

        if self.monte_carlo_paths == 0 {
            errors.push(ValidationError::with_rule(
                "market.monte_carlo_paths",
                "Monte Carlo paths must be positive",
                "positive",
            ));
        }

        errors
    }
}

// =============================================================================
// OPERATIONAL
// =============================================================================

/// Operational risk settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalConfig {
    /// Standard deviations added to the mean loss.
    #[serde(default = "default_capital_multiplier")]
    pub capital_multiplier: f64,
}

fn default_capital_multiplier() -> f64 {
    DEFAULT_CAPITAL_MULTIPLIER
}

impl Default for OperationalConfig {
    fn default() -> Self {
        Self {
            capital_multiplier: default_capital_multiplier(),
        }
    }
}

impl OperationalConfig {
    /// Builds the configured calculator.
    pub fn build(&self) -> ConfigResult<OperationalRiskCalculator> {
        Ok(OperationalRiskCalculator::new(self.capital_multiplier)?)
    }
}

impl Validate for OperationalConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_non_negative(
            &mut errors,
            "operational.capital_multiplier",
            self.capital_multiplier,
        );
        errors
    }
}

// =============================================================================
// REGULATORY
// =============================================================================

/// Regulatory reporting settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegulatoryConfig {
    /// Risk weight per exposure class.
    #[serde(default)]
    pub risk_weights: RiskWeightTable,

    /// Minimum capital ratios.
    #[serde(default)]
    pub requirements: CapitalRequirements,
}

impl RegulatoryConfig {
    /// Builds the configured reporter.
    pub fn build(&self) -> RegulatoryReporting {
        RegulatoryReporting::new(self.risk_weights.clone())
    }
}

impl Validate for RegulatoryConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (class, weight) in &self.risk_weights.weights {
            check_non_negative(
                &mut errors,
                &format!("regulatory.risk_weights.weights.{class}"),
                *weight,
            );
        }
        check_non_negative(
            &mut errors,
            "regulatory.risk_weights.default_weight",
            self.risk_weights.default_weight,
        );

        let req = &self.requirements;
        check_unit_interval(&mut errors, "regulatory.requirements.cet1_minimum", req.cet1_minimum);
        check_unit_interval(&mut errors, "regulatory.requirements.tier1_minimum", req.tier1_minimum);
        check_unit_interval(
            &mut errors,
            "regulatory.requirements.total_capital_minimum",
            req.total_capital_minimum,
        );

        errors
    }
}

// =============================================================================
// STRESS
// =============================================================================

/// Stress test settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressConfig {
    /// Duration assumed for fixed income positions without one.
    #[serde(default = "default_duration")]
    pub default_duration: f64,
}

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            default_duration: default_duration(),
        }
    }
}

impl StressConfig {
    /// Builds the configured engine.
    pub fn build(&self) -> ConfigResult<StressTestEngine> {
        Ok(StressTestEngine::new(self.default_duration)?)
    }
}

impl Validate for StressConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_non_negative(&mut errors, "stress.default_duration", self.default_duration);
        errors
    }
}

// =============================================================================
// REPORTING
// =============================================================================

/// Decimal places used when reporting figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// Places for ratios (PD, LGD, capital ratios).
    #[serde(default = "default_ratio_precision")]
    pub ratio_precision: u32,

    /// Places for currency amounts.
    #[serde(default = "default_currency_precision")]
    pub currency_precision: u32,

    /// Places for VaR and CVaR.
    #[serde(default = "default_return_precision")]
    pub return_precision: u32,
}

fn default_ratio_precision() -> u32 {
    4
}

fn default_currency_precision() -> u32 {
    2
}

fn default_return_precision() -> u32 {
    6
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            ratio_precision: default_ratio_precision(),
            currency_precision: default_currency_precision(),
            return_precision: default_return_precision(),
        }
    }
}

impl Validate for ReportingConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("reporting.ratio_precision", self.ratio_precision),
            ("reporting.currency_precision", self.currency_precision),
            ("reporting.return_precision", self.return_precision),
        ] {
            if value > MAX_PRECISION {
                errors.push(ValidationError::with_rule(
                    field,
                    format!("Precision {value} exceeds maximum of {MAX_PRECISION}"),
                    "max_precision",
                ));
            }
        }

        errors
    }
}
