//! Capital ratios command implementation.

use anyhow::Result;
use clap::Args;

use bankrisk_api::{CapitalRatiosRequest, CapitalRatiosResponse};

use super::Context;
use crate::output::{format_flag, format_percent, print_response, KeyValue, View};

/// Arguments for the capital command.
#[derive(Args, Debug)]
pub struct CapitalArgs {
    /// Tier 1 capital
    #[arg(long, default_value_t = 0.0)]
    pub tier1: f64,

    /// Tier 2 capital
    #[arg(long, default_value_t = 0.0)]
    pub tier2: f64,

    /// Total risk-weighted assets
    #[arg(long, default_value_t = 0.0)]
    pub rwa: f64,
}

fn view(response: &CapitalRatiosResponse) -> View<KeyValue> {
    let ratios = &response.ratios;
    let minimums = &response.requirements;
    let compliance = &response.compliance;

    let check = |ratio: f64, minimum: f64, ok: bool| {
        format!(
            "{} (min {}) {}",
            format_percent(ratio),
            format_percent(minimum),
            format_flag(ok)
        )
    };

    View::metrics(vec![
        KeyValue::new(
            "CET1 Ratio",
            check(ratios.cet1_ratio, minimums.cet1_minimum, compliance.cet1_compliant),
        ),
        KeyValue::new(
            "Tier 1 Ratio",
            check(ratios.tier1_ratio, minimums.tier1_minimum, compliance.tier1_compliant),
        ),
        KeyValue::new(
            "Total Capital Ratio",
            check(
                ratios.total_capital_ratio,
                minimums.total_capital_minimum,
                compliance.total_capital_compliant,
            ),
        ),
        KeyValue::number("Leverage Ratio", ratios.leverage_ratio),
        KeyValue::new("Compliant", format_flag(compliance.is_compliant())),
    ])
}

/// Executes the capital command.
pub fn execute(args: CapitalArgs, ctx: &Context) -> Result<()> {
    let request = CapitalRatiosRequest {
        tier1_capital: args.tier1,
        tier2_capital: args.tier2,
        total_rwa: args.rwa,
    };
    let result = ctx.service.capital_ratios(&request);
    print_response("Capital Ratios", result, ctx.format, view)
}
