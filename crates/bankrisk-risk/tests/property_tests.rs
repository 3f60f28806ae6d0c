//! Property-based tests for calculator invariants.
//!
//! These tests verify properties that should hold for any valid input:
//! - PD stays inside its floor and cap and falls with the credit score
//! - LGD stays inside [0, 1] and expected loss is PD x LGD x EAD
//! - CVaR never exceeds VaR and VaR never rises with confidence
//! - Stress runs are idempotent and unknown shocks change nothing

use bankrisk_risk::credit::{CreditRiskCalculator, PD_CAP, PD_FLOOR};
use bankrisk_risk::market::{historical_cvar, historical_var, parametric_var};
use bankrisk_risk::regulatory::{ExposureRow, ExposureType, RegulatoryReporting, RwaSummary};
use bankrisk_risk::stress::{AssetClass, Position, StressScenario, StressTestEngine};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn returns_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-0.2f64..0.2, 2..200)
}

fn asset_class_strategy() -> impl Strategy<Value = AssetClass> {
    prop_oneof![
        Just(AssetClass::Equity),
        Just(AssetClass::FixedIncome),
        Just(AssetClass::CorporateBond),
        Just(AssetClass::Other("cash".to_string())),
    ]
}

fn portfolio_strategy() -> impl Strategy<Value = Vec<Position>> {
    prop::collection::vec(
        (
            asset_class_strategy(),
            0.0f64..10_000_000.0,
            prop::option::of(0.0f64..30.0),
        )
            .prop_map(|(asset_class, value, duration)| Position {
                asset_class,
                value,
                duration,
            }),
        1..30,
    )
}

fn exposure_type_strategy() -> impl Strategy<Value = ExposureType> {
    prop_oneof![
        Just(ExposureType::Sovereign),
        Just(ExposureType::Bank),
        Just(ExposureType::Corporate),
        Just(ExposureType::Retail),
        Just(ExposureType::ResidentialMortgage),
        Just(ExposureType::CommercialRealEstate),
        Just(ExposureType::Other("unrated".to_string())),
    ]
}

// =============================================================================
// CREDIT
// =============================================================================

proptest! {
    #[test]
    fn pd_within_bounds(score in 300.0f64..=850.0, debt_ratio in 0.0f64..5.0, delinquencies in 0u32..20) {
        let pd = CreditRiskCalculator::default()
            .calculate_pd(score, debt_ratio, delinquencies)
            .unwrap();
        prop_assert!((PD_FLOOR..=PD_CAP).contains(&pd));
    }

    #[test]
    fn pd_non_increasing_in_score(low in 300.0f64..=850.0, gap in 0.0f64..550.0, debt_ratio in 0.0f64..2.0) {
        let high = (low + gap).min(850.0);
        let calc = CreditRiskCalculator::default();
        let pd_low = calc.calculate_pd(low, debt_ratio, 0).unwrap();
        let pd_high = calc.calculate_pd(high, debt_ratio, 0).unwrap();
        prop_assert!(pd_high <= pd_low);
    }

    #[test]
    fn pd_non_decreasing_in_debt_ratio(score in 300.0f64..=850.0, low in 0.0f64..3.0, gap in 0.0f64..3.0) {
        let calc = CreditRiskCalculator::default();
        let pd_low = calc.calculate_pd(score, low, 1).unwrap();
        let pd_high = calc.calculate_pd(score, low + gap, 1).unwrap();
        prop_assert!(pd_high >= pd_low);
    }

    #[test]
    fn pd_non_decreasing_in_delinquencies(score in 300.0f64..=850.0, debt_ratio in 0.0f64..2.0, count in 0u32..15) {
        let calc = CreditRiskCalculator::default();
        let pd = calc.calculate_pd(score, debt_ratio, count).unwrap();
        let pd_more = calc.calculate_pd(score, debt_ratio, count + 1).unwrap();
        prop_assert!(pd_more >= pd);
    }

    #[test]
    fn lgd_within_unit_interval(collateral in 0.0f64..1e7, exposure in -1e6f64..1e7, recovery in 0.0f64..=1.0) {
        let lgd = CreditRiskCalculator::default()
            .calculate_lgd_with_recovery(collateral, exposure, recovery)
            .unwrap();
        prop_assert!((0.0..=1.0).contains(&lgd));
    }

    #[test]
    fn expected_loss_is_product(pd in 0.0f64..=1.0, lgd in 0.0f64..=1.0, ead in 0.0f64..1e9) {
        let el = CreditRiskCalculator::default().calculate_expected_loss(pd, lgd, ead);
        prop_assert_eq!(el, pd * lgd * ead);
        prop_assert!(el >= 0.0 && el <= ead);
    }

    #[test]
    fn ead_not_negative(balance in 0.0f64..1e7, limit in 0.0f64..1e7, utilization in 0.0f64..=1.0) {
        let ead = CreditRiskCalculator::default()
            .calculate_ead_with_utilization(balance, limit, utilization)
            .unwrap();
        prop_assert!(ead >= 0.0);
    }
}

// =============================================================================
// MARKET
// =============================================================================

proptest! {
    #[test]
    fn cvar_not_above_var(returns in returns_strategy(), confidence in 0.5f64..0.995) {
        let var = historical_var(&returns, confidence).unwrap();
        let cvar = historical_cvar(&returns, confidence).unwrap();
        prop_assert!(cvar <= var + 1e-12);
    }

    #[test]
    fn historical_var_monotonic_in_confidence(returns in returns_strategy(), c1 in 0.5f64..0.99, bump in 0.0f64..0.009) {
        let c2 = c1 + bump;
        let var_1 = historical_var(&returns, c1).unwrap();
        let var_2 = historical_var(&returns, c2).unwrap();
        prop_assert!(var_2 <= var_1 + 1e-12);
    }

    #[test]
    fn historical_var_within_sample_range(returns in returns_strategy(), confidence in 0.5f64..0.995) {
        let var = historical_var(&returns, confidence).unwrap();
        let min = returns.iter().copied().fold(f64::INFINITY, f64::min);
        let max = returns.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(var >= min - 1e-12 && var <= max + 1e-12);
    }

    #[test]
    fn parametric_var_monotonic_in_confidence(returns in returns_strategy(), c1 in 0.5f64..0.98, bump in 0.001f64..0.01) {
        let var_1 = parametric_var(&returns, c1).unwrap();
        let var_2 = parametric_var(&returns, c1 + bump).unwrap();
        prop_assert!(var_2 <= var_1 + 1e-12);
    }
}

// =============================================================================
// REGULATORY
// =============================================================================

proptest! {
    #[test]
    fn rwa_preserves_rows_and_is_bounded(
        rows in prop::collection::vec((exposure_type_strategy(), 0.0f64..1e8), 0..40)
    ) {
        let exposures: Vec<ExposureRow> = rows
            .into_iter()
            .map(|(t, amount)| ExposureRow::new(t, amount))
            .collect();
        let out = RegulatoryReporting::default().calculate_rwa(&exposures).unwrap();
        prop_assert_eq!(out.len(), exposures.len());
        for (row, input) in out.iter().zip(&exposures) {
            prop_assert_eq!(&row.exposure, input);
            prop_assert!(row.rwa >= 0.0 && row.rwa <= input.amount);
        }

        let summary = RwaSummary::from_rows(&out);
        prop_assert!((0.0..=1.0 + 1e-12).contains(&summary.average_risk_weight));
    }

    #[test]
    fn capital_ratios_ordered(tier1 in 0.0f64..1e9, tier2 in 0.0f64..1e9, rwa in 1.0f64..1e10) {
        let ratios = RegulatoryReporting::default()
            .calculate_capital_ratios(tier1, tier2, rwa)
            .unwrap();
        prop_assert!(ratios.cet1_ratio <= ratios.tier1_ratio);
        prop_assert!(ratios.tier1_ratio <= ratios.total_capital_ratio);
    }
}

// =============================================================================
// STRESS
// =============================================================================

proptest! {
    #[test]
    fn stress_is_idempotent(
        portfolio in portfolio_strategy(),
        equity in prop::option::of(-0.9f64..0.5),
        rates in prop::option::of(-0.05f64..0.05),
        spread in prop::option::of(-0.5f64..0.2),
    ) {
        let scenario = StressScenario {
            equity_shock: equity,
            interest_rate_shock: rates,
            credit_spread_shock: spread,
        };
        let engine = StressTestEngine::default();
        let snapshot = portfolio.clone();
        let first = engine.run_stress_test(&portfolio, &scenario).unwrap();
        let second = engine.run_stress_test(&portfolio, &scenario).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&portfolio, &snapshot);
    }

    #[test]
    fn empty_scenario_changes_nothing(portfolio in portfolio_strategy()) {
        let rows = StressTestEngine::default()
            .run_stress_test(&portfolio, &StressScenario::new())
            .unwrap();
        for (row, position) in rows.iter().zip(&portfolio) {
            prop_assert_eq!(row.stressed_value, position.value);
            prop_assert_eq!(row.loss, 0.0);
        }
    }

    #[test]
    fn loss_is_value_minus_stressed(portfolio in portfolio_strategy(), equity in -0.9f64..0.5) {
        let rows = StressTestEngine::default()
            .run_stress_test(&portfolio, &StressScenario::new().with_equity_shock(equity))
            .unwrap();
        for row in &rows {
            prop_assert!((row.position.value - row.stressed_value - row.loss).abs() < 1e-6);
        }
    }
}
