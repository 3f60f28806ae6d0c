//! Stress test command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use bankrisk_api::{StressTestRequest, StressTestResponse};

use super::{read_request, Context, InputArgs};
use crate::output::{format_amount, print_response, KeyValue, View};

/// One position row of the detail table.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct StressLine {
    #[tabled(rename = "Asset Class")]
    pub asset_class: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Stressed Value")]
    pub stressed_value: String,
    #[tabled(rename = "Loss")]
    pub loss: String,
    #[tabled(rename = "Loss %")]
    pub loss_pct: String,
}

fn view(response: &StressTestResponse) -> View<StressLine> {
    let summary = &response.summary;
    let mut metrics = vec![
        KeyValue::amount("Portfolio Value", summary.total_portfolio_value),
        KeyValue::amount("Total Loss", summary.total_loss),
        KeyValue::new("Loss %", format!("{:.2}%", summary.loss_percentage)),
    ];
    metrics.extend(
        response
            .scenario
            .iter()
            .map(|(name, shock)| KeyValue::number(format!("Scenario {name}"), *shock)),
    );

    let details = response
        .details
        .iter()
        .map(|row| StressLine {
            asset_class: row.position.asset_class.to_string(),
            value: format_amount(row.position.value),
            stressed_value: format_amount(row.stressed_value),
            loss: format_amount(row.loss),
            loss_pct: format!("{:.2}%", row.loss_pct),
        })
        .collect();

    View::with_details(metrics, details)
}

/// Executes the stress command.
pub fn execute(args: InputArgs, ctx: &Context) -> Result<()> {
    let request: StressTestRequest = read_request(&args.input)?;
    let result = ctx.service.stress_test(&request);
    print_response("Stress Test", result, ctx.format, view)
}
