//! Operational risk command implementation.

use anyhow::Result;

use bankrisk_api::OperationalRiskRequest;

use super::{read_request, Context, InputArgs};
use crate::output::{print_response, KeyValue, View};

/// Executes the oprisk command.
pub fn execute(args: InputArgs, ctx: &Context) -> Result<()> {
    let request: OperationalRiskRequest = read_request(&args.input)?;
    let result = ctx.service.operational_risk(&request);

    print_response("Operational Risk", result, ctx.format, |r| {
        View::metrics(vec![
            KeyValue::new("Loss Events", r.loss_count.to_string()),
            KeyValue::amount("Expected Loss", r.expected_loss),
            KeyValue::amount("Std Deviation", r.std_dev),
            KeyValue::amount("Maximum Loss", r.max_loss),
            KeyValue::amount("Capital Requirement", r.capital_requirement),
        ])
    })
}
