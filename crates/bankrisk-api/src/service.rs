//! Request handling over the configured calculators.

use tracing::{debug, warn};

use bankrisk_config::{ConfigResult, EngineConfig, MarketConfig, ReportingConfig};
use bankrisk_risk::credit::CreditRiskCalculator;
use bankrisk_risk::market::VarMethod;
use bankrisk_risk::operational::{OperationalRiskCalculator, OperationalRiskCapital};
use bankrisk_risk::regulatory::{CapitalRatios, CapitalRequirements, RegulatoryReporting, RwaSummary};
use bankrisk_risk::stress::{StressSummary, StressTestEngine};

use crate::dto::{
    round_to, CapitalRatiosRequest, CapitalRatiosResponse, CreditRiskRequest, CreditRiskResponse,
    OperationalRiskRequest, OperationalRiskResponse, RwaRequest, RwaResponse, StressTestRequest,
    StressTestResponse, VarRequest, VarResponse,
};
use crate::error::{ApiError, ApiResult};

/// Boundary between requests and the calculators.
///
/// Holds one instance of each calculator, built once from an
/// [`EngineConfig`]. Every method validates its request, runs the
/// calculation and rounds the reported figures.
#[derive(Debug, Clone)]
pub struct RiskService {
    credit: CreditRiskCalculator,
    market: MarketConfig,
    operational: OperationalRiskCalculator,
    regulatory: RegulatoryReporting,
    requirements: CapitalRequirements,
    stress: StressTestEngine,
    reporting: ReportingConfig,
}

impl RiskService {
    /// Builds the service from a configuration.
    pub fn new(config: &EngineConfig) -> ConfigResult<Self> {
        Ok(Self {
            credit: config.credit.build()?,
            market: config.market.clone(),
            operational: config.operational.build()?,
            regulatory: config.regulatory.build(),
            requirements: config.regulatory.requirements,
            stress: config.stress.build()?,
            reporting: config.reporting,
        })
    }

    /// Service with the default configuration.
    pub fn with_defaults() -> ConfigResult<Self> {
        Self::new(&EngineConfig::default())
    }

    /// PD, LGD, EAD and expected loss.
    pub fn credit_risk(&self, request: &CreditRiskRequest) -> ApiResult<CreditRiskResponse> {
        logged("credit_risk", self.try_credit_risk(request))
    }

    /// VaR by the requested method and historical CVaR.
    pub fn value_at_risk(&self, request: &VarRequest) -> ApiResult<VarResponse> {
        logged("value_at_risk", self.try_value_at_risk(request))
    }

    /// Operational risk capital.
    pub fn operational_risk(
        &self,
        request: &OperationalRiskRequest,
    ) -> ApiResult<OperationalRiskResponse> {
        logged("operational_risk", self.try_operational_risk(request))
    }

    /// Risk-weighted assets.
    pub fn rwa(&self, request: &RwaRequest) -> ApiResult<RwaResponse> {
        logged("rwa", self.try_rwa(request))
    }

    /// Capital ratios and the compliance check.
    pub fn capital_ratios(
        &self,
        request: &CapitalRatiosRequest,
    ) -> ApiResult<CapitalRatiosResponse> {
        logged("capital_ratios", self.try_capital_ratios(request))
    }

    /// Applies the request scenario to the portfolio.
    pub fn stress_test(&self, request: &StressTestRequest) -> ApiResult<StressTestResponse> {
        logged("stress_test", self.try_stress_test(request))
    }

    fn try_credit_risk(&self, request: &CreditRiskRequest) -> ApiResult<CreditRiskResponse> {
        let pd = self.credit.calculate_pd(
            request.credit_score,
            request.debt_ratio,
            request.delinquency_count,
        )?;
        let lgd = self
            .credit
            .calculate_lgd(request.collateral_value, request.exposure)?;
        let ead = self
            .credit
            .calculate_ead(request.current_balance, request.credit_limit)?;
        let el = self.credit.calculate_expected_loss(pd, lgd, ead);

        Ok(CreditRiskResponse {
            probability_of_default: self.ratio(pd),
            loss_given_default: self.ratio(lgd),
            exposure_at_default: self.currency(ead),
            expected_loss: self.currency(el),
        })
    }

    fn try_value_at_risk(&self, request: &VarRequest) -> ApiResult<VarResponse> {
        if request.returns.is_empty() {
            return Err(ApiError::Validation("No returns data provided".to_string()));
        }
        let method: VarMethod = request.method.parse()?;
        let calc = self
            .market
            .build(request.confidence_level, request.seed)?;

        let var = calc.calculate_var(&request.returns, method)?;
        let cvar = calc.calculate_cvar(&request.returns)?;

        Ok(VarResponse {
            var: round_to(var, self.reporting.return_precision),
            cvar: round_to(cvar, self.reporting.return_precision),
            confidence_level: calc.confidence_level(),
            method: method.as_str().to_string(),
            sample_size: request.returns.len(),
        })
    }

    fn try_operational_risk(
        &self,
        request: &OperationalRiskRequest,
    ) -> ApiResult<OperationalRiskResponse> {
        if request.loss_events.is_empty() {
            return Err(ApiError::Validation("No loss events provided".to_string()));
        }
        let capital = self
            .operational
            .calculate_operational_risk_capital(&request.loss_events)?;

        Ok(OperationalRiskCapital {
            expected_loss: self.currency(capital.expected_loss),
            std_dev: self.currency(capital.std_dev),
            max_loss: self.currency(capital.max_loss),
            capital_requirement: self.currency(capital.capital_requirement),
            loss_count: capital.loss_count,
        })
    }

    fn try_rwa(&self, request: &RwaRequest) -> ApiResult<RwaResponse> {
        if request.exposures.is_empty() {
            return Err(ApiError::Validation("No exposures provided".to_string()));
        }
        let (summary, details) = self.regulatory.summarize_rwa(&request.exposures)?;

        Ok(RwaResponse {
            summary: RwaSummary {
                total_exposure: self.currency(summary.total_exposure),
                total_rwa: self.currency(summary.total_rwa),
                average_risk_weight: self.ratio(summary.average_risk_weight),
            },
            details,
        })
    }

    fn try_capital_ratios(
        &self,
        request: &CapitalRatiosRequest,
    ) -> ApiResult<CapitalRatiosResponse> {
        let ratios = self.regulatory.calculate_capital_ratios(
            request.tier1_capital,
            request.tier2_capital,
            request.total_rwa,
        )?;
        let compliance = self.requirements.check(&ratios);

        Ok(CapitalRatiosResponse {
            ratios: CapitalRatios {
                cet1_ratio: self.ratio(ratios.cet1_ratio),
                tier1_ratio: self.ratio(ratios.tier1_ratio),
                total_capital_ratio: self.ratio(ratios.total_capital_ratio),
                leverage_ratio: self.ratio(ratios.leverage_ratio),
            },
            requirements: self.requirements,
            compliance,
        })
    }

    fn try_stress_test(&self, request: &StressTestRequest) -> ApiResult<StressTestResponse> {
        if request.portfolio.is_empty() {
            return Err(ApiError::Validation("No portfolio data provided".to_string()));
        }
        let (summary, details) = self
            .stress
            .summarize(&request.portfolio, &request.stress_scenario())?;

        Ok(StressTestResponse {
            summary: StressSummary {
                total_portfolio_value: self.currency(summary.total_portfolio_value),
                total_loss: self.currency(summary.total_loss),
                loss_percentage: self.currency(summary.loss_percentage),
            },
            scenario: request.scenario.clone(),
            details,
        })
    }

    fn ratio(&self, value: f64) -> f64 {
        round_to(value, self.reporting.ratio_precision)
    }

    fn currency(&self, value: f64) -> f64 {
        round_to(value, self.reporting.currency_precision)
    }
}

fn logged<T>(operation: &str, outcome: ApiResult<T>) -> ApiResult<T> {
    match &outcome {
        Ok(_) => debug!(operation, "request served"),
        Err(err) if err.is_validation() => warn!(operation, error = %err, "request rejected"),
        Err(err) => warn!(operation, error = %err, "calculation failed"),
    }
    outcome
}
