//! Logistic probability-of-default model.

use serde::{Deserialize, Serialize};

/// Coefficients of a logistic-regression PD model.
///
/// `logit = intercept + credit_score_coef * score
///        + debt_ratio_coef * debt_ratio + delinquency_coef * delinquencies`
///
/// The model is a plain value so alternative scorecards can be injected
/// into [`CreditRiskCalculator`](super::CreditRiskCalculator) without code
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PdModel {
    /// Constant term.
    #[serde(default = "default_intercept")]
    pub intercept: f64,
    /// Sensitivity to the credit score (negative: better score, lower PD).
    #[serde(default = "default_credit_score_coef")]
    pub credit_score_coef: f64,
    /// Sensitivity to the debt-to-income ratio.
    #[serde(default = "default_debt_ratio_coef")]
    pub debt_ratio_coef: f64,
    /// Sensitivity to the number of past delinquencies.
    #[serde(default = "default_delinquency_coef")]
    pub delinquency_coef: f64,
}

fn default_intercept() -> f64 {
    -2.5
}

fn default_credit_score_coef() -> f64 {
    -0.015
}

fn default_debt_ratio_coef() -> f64 {
    1.2
}

fn default_delinquency_coef() -> f64 {
    0.8
}

impl Default for PdModel {
    fn default() -> Self {
        Self::standard()
    }
}

impl PdModel {
    /// Default retail scorecard.
    pub fn standard() -> Self {
        Self {
            intercept: default_intercept(),
            credit_score_coef: default_credit_score_coef(),
            debt_ratio_coef: default_debt_ratio_coef(),
            delinquency_coef: default_delinquency_coef(),
        }
    }

    /// Linear predictor of the model.
    pub fn logit(&self, credit_score: f64, debt_ratio: f64, delinquency_count: u32) -> f64 {
        self.intercept
            + self.credit_score_coef * credit_score
            + self.debt_ratio_coef * debt_ratio
            + self.delinquency_coef * f64::from(delinquency_count)
    }

    /// Unclamped default probability, `1 / (1 + e^-logit)`.
    pub fn probability(&self, credit_score: f64, debt_ratio: f64, delinquency_count: u32) -> f64 {
        let logit = self.logit(credit_score, debt_ratio, delinquency_count);
        1.0 / (1.0 + (-logit).exp())
    }

    /// True when every coefficient is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.intercept,
            self.credit_score_coef,
            self.debt_ratio_coef,
            self.delinquency_coef,
        ]
        .iter()
        .all(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_logit() {
        let model = PdModel::standard();
        // -2.5 - 0.015 * 650 + 1.2 * 0.4 + 0.8 * 1
        assert_relative_eq!(model.logit(650.0, 0.4, 1), -10.97, epsilon = 1e-12);
    }

    #[test]
    fn test_probability_is_logistic() {
        let model = PdModel {
            intercept: 0.0,
            credit_score_coef: 0.0,
            debt_ratio_coef: 0.0,
            delinquency_coef: 0.0,
        };
        assert_relative_eq!(model.probability(700.0, 0.3, 0), 0.5);
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let model: PdModel = serde_json::from_str(r#"{"intercept": -1.0}"#).unwrap();
        assert_relative_eq!(model.intercept, -1.0);
        assert_relative_eq!(model.credit_score_coef, -0.015);
        assert_relative_eq!(model.delinquency_coef, 0.8);
    }
}
