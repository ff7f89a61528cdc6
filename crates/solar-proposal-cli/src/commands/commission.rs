use clap::Args;
use serde_json::Value;

use solar_proposal_core::commission::{calculate_commission, normalize_commission_rate};
use solar_proposal_core::{Commission, ProposalCalculation};

use crate::input;

/// Arguments for the commission calculation.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CommissionArgs {
    /// Path to a persisted calculation blob; its cash total becomes the base
    #[arg(long)]
    pub input: Option<String>,

    /// Contract value used when no calculation blob is given (or as fallback)
    #[arg(long)]
    pub contract_value: Option<f64>,

    /// Configured rate: a fraction (0.03) or a whole-number percent (3)
    #[arg(long)]
    pub percent: Option<f64>,
}

pub fn run_commission(args: CommissionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fallback = args.contract_value.unwrap_or(0.0);

    let commission = if let Some(ref path) = args.input {
        let blob: String = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{path}': {e}"))?;
        let calculation = ProposalCalculation::from_json_str(&blob)?;
        calculate_commission(&calculation, fallback, args.percent)
    } else if let Some(data) = input::read_stdin()? {
        let calculation: ProposalCalculation = serde_json::from_value(data)?;
        calculate_commission(&calculation, fallback, args.percent)
    } else {
        let base_value = args
            .contract_value
            .ok_or("--contract-value is required (or provide --input)")?;
        let percent = normalize_commission_rate(args.percent);
        Commission {
            percent,
            value: base_value * percent,
            base_value,
        }
    };

    Ok(serde_json::to_value(&commission)?)
}
