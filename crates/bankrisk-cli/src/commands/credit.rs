//! Credit command implementation.

use anyhow::Result;
use clap::Args;

use bankrisk_api::CreditRiskRequest;

use super::Context;
use crate::output::{print_response, KeyValue, View};

/// Arguments for the credit command.
#[derive(Args, Debug)]
pub struct CreditArgs {
    /// Bureau credit score (300-850)
    #[arg(long, default_value_t = 700.0)]
    pub score: f64,

    /// Debt-to-income ratio
    #[arg(long, default_value_t = 0.3)]
    pub debt_ratio: f64,

    /// Number of past delinquencies
    #[arg(long, default_value_t = 0)]
    pub delinquencies: u32,

    /// Collateral value
    #[arg(long, default_value_t = 0.0)]
    pub collateral: f64,

    /// Exposure used for the LGD split
    #[arg(long, default_value_t = 100_000.0)]
    pub exposure: f64,

    /// Drawn balance
    #[arg(long, default_value_t = 50_000.0)]
    pub balance: f64,

    /// Committed credit limit
    #[arg(long, default_value_t = 100_000.0)]
    pub limit: f64,
}

impl From<&CreditArgs> for CreditRiskRequest {
    fn from(args: &CreditArgs) -> Self {
        Self {
            credit_score: args.score,
            debt_ratio: args.debt_ratio,
            delinquency_count: args.delinquencies,
            collateral_value: args.collateral,
            exposure: args.exposure,
            current_balance: args.balance,
            credit_limit: args.limit,
        }
    }
}

/// Executes the credit command.
pub fn execute(args: CreditArgs, ctx: &Context) -> Result<()> {
    let request = CreditRiskRequest::from(&args);
    let result = ctx.service.credit_risk(&request);

    print_response("Credit Risk", result, ctx.format, |r| {
        View::metrics(vec![
            KeyValue::percent("Probability of Default", r.probability_of_default),
            KeyValue::percent("Loss Given Default", r.loss_given_default),
            KeyValue::amount("Exposure at Default", r.exposure_at_default),
            KeyValue::amount("Expected Loss", r.expected_loss),
        ])
    })
}
