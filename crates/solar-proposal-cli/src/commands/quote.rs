use clap::Args;
use serde_json::Value;

use solar_proposal_core::calculate_proposal;
use solar_proposal_core::proposal::input::{
    DimensioningInput, InverterType, KitInput, MarginInput, ProposalInput, StructureInput,
};

use crate::input;

/// Arguments for a full proposal quote.
///
/// A complete `ProposalInput` JSON object via `--input` or stdin covers every
/// field (finance, trade-in, extras, param overrides); the flags below are a
/// shortcut for simple cash quotes.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct QuoteArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Number of modules
    #[arg(long)]
    pub modules: Option<f64>,

    /// Module power in watts (e.g. 550)
    #[arg(long)]
    pub module_power_w: Option<f64>,

    /// kWh per Wp production factor
    #[arg(long)]
    pub production_index: Option<f64>,

    /// Inverter family: string or micro
    #[arg(long, default_value = "string")]
    pub inverter: String,

    /// Module cost per watt
    #[arg(long)]
    pub module_cost_per_watt: Option<f64>,

    /// Cabling cost per module
    #[arg(long)]
    pub cabling_cost: Option<f64>,

    /// Aggregate string-inverter cost
    #[arg(long)]
    pub string_inverter_cost: Option<f64>,

    /// Micro-inverter unit cost
    #[arg(long)]
    pub micro_unit_cost: Option<f64>,

    /// Ground-mount panel count
    #[arg(long)]
    pub ground_panels: Option<f64>,

    /// Ground-mount cost per panel
    #[arg(long)]
    pub ground_panel_cost: Option<f64>,

    /// Roof-mount panel count
    #[arg(long)]
    pub roof_panels: Option<f64>,

    /// Roof-mount cost per panel
    #[arg(long)]
    pub roof_panel_cost: Option<f64>,

    /// Margin as a fraction (e.g. 0.2 for 20%)
    #[arg(long)]
    pub margin: Option<f64>,
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let proposal_input: ProposalInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let inverter_type = match args.inverter.to_lowercase().as_str() {
            "string" => InverterType::String,
            "micro" => InverterType::Micro,
            other => return Err(format!("Unknown inverter type '{other}' (expected string|micro)").into()),
        };
        ProposalInput {
            dimensioning: DimensioningInput {
                module_count: args.modules.unwrap_or(0.0),
                module_power_w: args.module_power_w.unwrap_or(0.0),
                production_index: args.production_index.unwrap_or(0.0),
                inverter_type,
                ..Default::default()
            },
            kit: KitInput {
                module_cost_per_watt: args.module_cost_per_watt.unwrap_or(0.0),
                cabling_cost_per_module: args.cabling_cost.unwrap_or(0.0),
                micro_inverter_unit_cost: args.micro_unit_cost.unwrap_or(0.0),
                string_inverter_total_cost: args.string_inverter_cost.unwrap_or(0.0),
            },
            structure: StructureInput {
                ground_panel_count: args.ground_panels.unwrap_or(0.0),
                ground_panel_unit_cost: args.ground_panel_cost.unwrap_or(0.0),
                roof_panel_count: args.roof_panels.unwrap_or(0.0),
                roof_panel_unit_cost: args.roof_panel_cost.unwrap_or(0.0),
            },
            margin: MarginInput {
                percent: args.margin.unwrap_or(0.0),
            },
            ..Default::default()
        }
    };

    let calculation = calculate_proposal(&proposal_input);
    Ok(serde_json::to_value(&calculation)?)
}
