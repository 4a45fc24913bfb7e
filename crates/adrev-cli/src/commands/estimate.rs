//! Revenue estimate command.

use std::fmt::Write as _;

use adrev_revenue::{compute, format_usd, validate_fields};

use super::Output;
use crate::cli::EstimateArgs;
use crate::config::CalculatorConfig;

/// Validate the merged input and estimate revenue.
///
/// Field and share errors are returned unwrapped so `main` can tell them
/// apart from I/O failures.
pub fn estimate(args: &EstimateArgs, config: &CalculatorConfig) -> anyhow::Result<Output> {
    let input = config.defaults.merge(args);
    validate_fields(&input)?;
    let estimate = compute(&input)?;

    let mut text = format!("Estimated Revenue: {estimate}");
    if args.breakdown {
        for c in &estimate.contributions {
            write!(
                text,
                "\n  {:<5} {:>6}% x {:.2} = {}",
                c.geo.code(),
                c.share_pct,
                c.rate,
                format_usd(c.amount)
            )?;
        }
        write!(
            text,
            "\n  banner {} x {}",
            estimate.banner, estimate.multiplier
        )?;
    }

    Ok(Output {
        json: serde_json::json!({
            "input": input,
            "revenue": estimate.rounded(),
            "formatted": estimate.to_string(),
            "estimate": estimate,
        }),
        text,
    })
}
