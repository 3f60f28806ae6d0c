//! RWA command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use bankrisk_api::{RwaRequest, RwaResponse};

use super::{read_request, Context, InputArgs};
use crate::output::{format_amount, format_percent, print_response, KeyValue, View};

/// One exposure row of the detail table.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct RwaLine {
    #[tabled(rename = "Exposure Type")]
    pub exposure_type: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Risk Weight")]
    pub risk_weight: String,
    #[tabled(rename = "RWA")]
    pub rwa: String,
    #[tabled(rename = "RWA (IRB)")]
    pub rwa_irb: String,
}

fn view(response: &RwaResponse) -> View<RwaLine> {
    let summary = &response.summary;
    let metrics = vec![
        KeyValue::amount("Total Exposure", summary.total_exposure),
        KeyValue::amount("Total RWA", summary.total_rwa),
        KeyValue::percent("Average Risk Weight", summary.average_risk_weight),
    ];

    let details = response
        .details
        .iter()
        .map(|row| RwaLine {
            exposure_type: row.exposure.exposure_type.to_string(),
            amount: format_amount(row.exposure.amount),
            risk_weight: format_percent(row.risk_weight),
            rwa: format_amount(row.rwa),
            rwa_irb: row.rwa_irb.map_or_else(|| "-".to_string(), format_amount),
        })
        .collect();

    View::with_details(metrics, details)
}

/// Executes the rwa command.
pub fn execute(args: InputArgs, ctx: &Context) -> Result<()> {
    let request: RwaRequest = read_request(&args.input)?;
    let result = ctx.service.rwa(&request);
    print_response("Risk-Weighted Assets", result, ctx.format, view)
}
