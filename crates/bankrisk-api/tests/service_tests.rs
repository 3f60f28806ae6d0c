//! Integration tests for the request/response boundary.

use approx::assert_relative_eq;
use bankrisk_api::*;
use bankrisk_config::EngineConfig;
use serde_json::json;

fn service() -> RiskService {
    RiskService::with_defaults().unwrap()
}

// =============================================================================
// CREDIT RISK
// =============================================================================

#[test]
fn credit_risk_with_defaults() {
    let request: CreditRiskRequest = serde_json::from_value(json!({})).unwrap();
    assert_eq!(request, CreditRiskRequest::default());

    let response = service().credit_risk(&request).unwrap();
    assert_relative_eq!(response.probability_of_default, 0.0001);
    assert_relative_eq!(response.loss_given_default, 0.6);
    assert_relative_eq!(response.exposure_at_default, 87_500.0);
    assert_relative_eq!(response.expected_loss, 5.25, epsilon = 1e-9);
}

#[test]
fn credit_risk_secured_borrower() {
    let request: CreditRiskRequest = serde_json::from_value(json!({
        "credit_score": 650,
        "debt_ratio": 0.4,
        "delinquency_count": 1,
        "collateral_value": 200000,
        "exposure": 250000,
        "current_balance": 50000,
        "credit_limit": 100000
    }))
    .unwrap();

    let response = service().credit_risk(&request).unwrap();
    // 200k secured at 20% plus 50k unsecured at 60% over 250k
    assert_relative_eq!(response.loss_given_default, 0.28, epsilon = 1e-12);
    assert_relative_eq!(response.exposure_at_default, 87_500.0);
}

#[test]
fn credit_risk_rejects_out_of_range_score() {
    let err = service()
        .credit_risk(&CreditRiskRequest {
            credit_score: 900.0,
            ..CreditRiskRequest::default()
        })
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.message().contains("credit_score"));
}

// =============================================================================
// MARKET RISK
// =============================================================================

fn returns() -> Vec<f64> {
    vec![
        -0.02, -0.015, -0.01, -0.005, 0.0, 0.005, 0.01, 0.015, 0.02, 0.025,
    ]
}

#[test]
fn historical_var_and_cvar() {
    let response = service().value_at_risk(&VarRequest::new(returns())).unwrap();
    assert_relative_eq!(response.var, -0.01775, epsilon = 1e-12);
    assert_relative_eq!(response.cvar, -0.02, epsilon = 1e-12);
    assert_relative_eq!(response.confidence_level, 0.95);
    assert_eq!(response.method, "historical");
    assert_eq!(response.sample_size, 10);
}

#[test]
fn parametric_var_reported() {
    let request: VarRequest = serde_json::from_value(json!({
        "returns": returns(),
        "confidence_level": 0.99,
        "method": "parametric"
    }))
    .unwrap();

    let response = service().value_at_risk(&request).unwrap();
    assert_eq!(response.method, "parametric");
    assert_relative_eq!(response.confidence_level, 0.99);
    assert!(response.var < 0.0);
}

#[test]
fn seeded_monte_carlo_is_reproducible() {
    let request = VarRequest {
        method: "monte_carlo".to_string(),
        seed: Some(11),
        ..VarRequest::new(returns())
    };
    let svc = service();
    let a = svc.value_at_risk(&request).unwrap();
    let b = svc.value_at_risk(&request).unwrap();
    assert_eq!(a, b);
}

#[test]
fn var_rejects_empty_returns_and_unknown_method() {
    let svc = service();

    let empty = svc.value_at_risk(&VarRequest::new(vec![])).unwrap_err();
    assert_eq!(empty, ApiError::Validation("No returns data provided".to_string()));

    let unknown = svc
        .value_at_risk(&VarRequest {
            method: "garch".to_string(),
            ..VarRequest::new(returns())
        })
        .unwrap_err();
    assert!(unknown.is_validation());
    assert!(unknown.message().contains("garch"));

    let bad_confidence = svc
        .value_at_risk(&VarRequest {
            confidence_level: Some(1.5),
            ..VarRequest::new(returns())
        })
        .unwrap_err();
    assert!(bad_confidence.is_validation());
}

// =============================================================================
// OPERATIONAL RISK
// =============================================================================

#[test]
fn operational_capital() {
    let request: OperationalRiskRequest = serde_json::from_value(json!({
        "loss_events": [
            {"amount": 50000, "date": "2024-01-15"},
            {"amount": 75000, "date": "2024-02-20"},
            {"amount": 120000},
            {"amount": 30000},
            {"amount": 95000}
        ]
    }))
    .unwrap();

    let response = service().operational_risk(&request).unwrap();
    let std_dev = 1.014e9_f64.sqrt();
    assert_relative_eq!(response.expected_loss, 74_000.0);
    assert_relative_eq!(response.max_loss, 120_000.0);
    assert_eq!(response.loss_count, 5);
    assert!((response.std_dev - std_dev).abs() <= 0.005 + 1e-9);
    assert!((response.capital_requirement - (74_000.0 + 3.0 * std_dev)).abs() <= 0.005 + 1e-9);
}

#[test]
fn operational_rejects_empty_history() {
    let err = service()
        .operational_risk(&OperationalRiskRequest { loss_events: vec![] })
        .unwrap_err();
    assert_eq!(err.message(), "No loss events provided");
}

#[test]
fn operational_overflow_fails_instead_of_reporting_nulls() {
    let request: OperationalRiskRequest = serde_json::from_value(json!({
        "loss_events": [{"amount": 1e308}, {"amount": 1.5e308}]
    }))
    .unwrap();

    let result = service().operational_risk(&request);
    let err = result.clone().unwrap_err();
    assert!(!err.is_validation());
    assert_eq!(err.code(), "CALCULATION_ERROR");

    let envelope = serde_json::to_value(ApiResponse::from_result(result)).unwrap();
    assert_eq!(envelope["success"], false);
    assert!(envelope.get("data").is_none());
}

// =============================================================================
// REGULATORY
// =============================================================================

#[test]
fn rwa_summary_and_details() {
    let request: RwaRequest = serde_json::from_value(json!({
        "exposures": [
            {"exposure_type": "corporate", "amount": 1000000, "pd": 0.02, "lgd": 0.45},
            {"exposure_type": "retail", "amount": 500000, "pd": 0.03, "lgd": 0.50}
        ]
    }))
    .unwrap();

    let response = service().rwa(&request).unwrap();
    assert_relative_eq!(response.summary.total_exposure, 1_500_000.0);
    assert_relative_eq!(response.summary.total_rwa, 1_375_000.0);
    assert_relative_eq!(response.summary.average_risk_weight, 0.9167, epsilon = 1e-12);

    assert_eq!(response.details.len(), 2);
    assert_relative_eq!(response.details[1].risk_weight, 0.75);
    assert_relative_eq!(response.details[1].rwa, 375_000.0);
    assert_relative_eq!(response.details[0].rwa_irb.unwrap(), 112_500.0, epsilon = 1e-6);
}

#[test]
fn rwa_rejects_empty_and_negative() {
    let svc = service();
    assert!(svc.rwa(&RwaRequest { exposures: vec![] }).unwrap_err().is_validation());

    let request: RwaRequest = serde_json::from_value(json!({
        "exposures": [{"exposure_type": "bank", "amount": -5}]
    }))
    .unwrap();
    assert!(svc.rwa(&request).unwrap_err().is_validation());
}

#[test]
fn capital_ratios_and_compliance() {
    let response = service()
        .capital_ratios(&CapitalRatiosRequest {
            tier1_capital: 1_000_000.0,
            tier2_capital: 500_000.0,
            total_rwa: 10_000_000.0,
        })
        .unwrap();

    assert_relative_eq!(response.ratios.tier1_ratio, 0.1, epsilon = 1e-12);
    assert_relative_eq!(response.ratios.total_capital_ratio, 0.15, epsilon = 1e-12);
    assert_relative_eq!(response.ratios.cet1_ratio, 0.09, epsilon = 1e-12);
    assert_relative_eq!(response.ratios.leverage_ratio, 3.3333, epsilon = 1e-12);
    assert_relative_eq!(response.requirements.cet1_minimum, 0.045);
    assert!(response.compliance.is_compliant());
}

#[test]
fn capital_ratios_default_to_zero() {
    let request: CapitalRatiosRequest = serde_json::from_value(json!({})).unwrap();
    let response = service().capital_ratios(&request).unwrap();
    assert_eq!(response.ratios.tier1_ratio, 0.0);
    assert_eq!(response.ratios.leverage_ratio, 0.0);
    assert!(!response.compliance.tier1_compliant);
}

// =============================================================================
// STRESS TEST
// =============================================================================

#[test]
fn stress_test_summary_details_and_echo() {
    let request: StressTestRequest = serde_json::from_value(json!({
        "portfolio": [
            {"asset_class": "equity", "value": 1000000, "duration": 0},
            {"asset_class": "fixed_income", "value": 2000000, "duration": 5}
        ],
        "scenario": {
            "equity_shock": -0.30,
            "interest_rate_shock": 0.02,
            "credit_spread_shock": 0.01
        }
    }))
    .unwrap();

    let response = service().stress_test(&request).unwrap();
    assert_relative_eq!(response.summary.total_portfolio_value, 3_000_000.0);
    assert_relative_eq!(response.summary.total_loss, 500_000.0, epsilon = 1e-6);
    assert_relative_eq!(response.summary.loss_percentage, 16.67, epsilon = 1e-9);
    assert_eq!(response.scenario.len(), 3);

    assert_relative_eq!(response.details[0].stressed_value, 700_000.0, epsilon = 1e-6);
    assert_relative_eq!(response.details[1].stressed_value, 1_800_000.0, epsilon = 1e-6);
    assert_relative_eq!(response.details[0].loss_pct, 30.0, epsilon = 1e-9);
}

#[test]
fn stress_test_unknown_shocks_change_nothing() {
    let request: StressTestRequest = serde_json::from_value(json!({
        "portfolio": [{"asset_class": "equity", "value": 100}],
        "scenario": {"fx_shock": -0.5}
    }))
    .unwrap();

    let response = service().stress_test(&request).unwrap();
    assert_eq!(response.summary.total_loss, 0.0);
    assert_eq!(response.details[0].stressed_value, 100.0);
    assert_eq!(response.scenario.get("fx_shock"), Some(&-0.5));
}

#[test]
fn stress_test_rejects_empty_portfolio() {
    let err = service()
        .stress_test(&StressTestRequest {
            portfolio: vec![],
            scenario: Default::default(),
        })
        .unwrap_err();
    assert_eq!(err.message(), "No portfolio data provided");
}

// =============================================================================
// ENVELOPE AND CONFIGURATION
// =============================================================================

#[test]
fn envelope_carries_data_or_error() {
    let svc = service();

    let ok = serde_json::to_value(ApiResponse::from_result(
        svc.capital_ratios(&CapitalRatiosRequest::default()),
    ))
    .unwrap();
    assert_eq!(ok["success"], true);
    assert!(ok["data"]["ratios"].is_object());
    assert!(ok.get("error").is_none());

    let failed = serde_json::to_value(ApiResponse::from_result(
        svc.value_at_risk(&VarRequest::new(vec![])),
    ))
    .unwrap();
    assert_eq!(failed["success"], false);
    assert_eq!(failed["error"]["code"], "VALIDATION_ERROR");
    assert!(failed.get("data").is_none());
}

#[test]
fn configured_precision_and_confidence_apply() {
    let config = EngineConfig::from_toml_str(
        r#"
        [market]
        confidence_level = 0.9

        [reporting]
        return_precision = 2
        "#,
    )
    .unwrap();
    let svc = RiskService::new(&config).unwrap();

    let response = svc.value_at_risk(&VarRequest::new(returns())).unwrap();
    assert_relative_eq!(response.confidence_level, 0.9);
    // rank 0.9 -> -0.02 + 0.9 * 0.005 = -0.0155, which rounds to -0.02
    assert_relative_eq!(response.var, -0.02, epsilon = 1e-12);
}
