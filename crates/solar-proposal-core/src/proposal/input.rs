//! Input value types for a proposal calculation.
//!
//! Everything is `#[serde(default)]`: the engine is fed partially-filled
//! forms and treats any missing numeric field as 0. Non-finite values that
//! arrive via direct construction are coerced at the point of use, never
//! rejected.

use serde::{Deserialize, Serialize};

use crate::params::ProposalParamsOverride;
use crate::types::{Money, Rate};

/// Which inverter family the proposal is priced on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InverterType {
    #[default]
    String,
    Micro,
}

/// How a trade-in credit is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeMode {
    /// Against the cash total.
    #[default]
    TotalValue,
    /// Against the financed balance, after down payment and balloons.
    Installments,
}

/// One heterogeneous string-inverter line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringInverterItem {
    pub quantity: f64,
    pub unit_cost: Money,
    pub power_kw: f64,
}

/// System dimensioning: array size, yield factor, and inverter selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensioningInput {
    pub module_count: f64,
    pub module_power_w: f64,
    /// kWh generated per Wp of array, monthly-equivalent factor.
    pub production_index: f64,
    /// DC/AC ratio; 0 falls back to the params default.
    pub oversizing_factor: f64,
    pub inverter_type: InverterType,
    /// Explicit string-inverter count; 0 means "not given".
    pub string_inverter_count: f64,
    /// Explicit string-inverter power in kW; 0 means "derive from kWp".
    pub string_inverter_power_kw: f64,
    /// Heterogeneous string-inverter line items. When non-empty (after
    /// filtering), these win over the explicit count/power fields.
    pub string_inverters: Vec<StringInverterItem>,
    /// Explicit micro-inverter count; 0 means "use the suggested count".
    pub micro_inverter_count: f64,
}

/// Unit costs for the equipment kit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitInput {
    pub module_cost_per_watt: Money,
    pub cabling_cost_per_module: Money,
    pub micro_inverter_unit_cost: Money,
    /// Aggregate string-inverter cost, used only when no line items are given.
    pub string_inverter_total_cost: Money,
}

/// Mounting structure counts and unit costs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureInput {
    pub ground_panel_count: f64,
    pub ground_panel_unit_cost: Money,
    pub roof_panel_count: f64,
    pub roof_panel_unit_cost: Money,
}

/// Margin applied to kit + structure after duplication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginInput {
    /// Fraction, e.g. 0.2 for 20%.
    pub percent: Rate,
}

/// A named extra charge on top of the system price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraItem {
    pub name: String,
    pub value: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrasInput {
    pub battery_value: Money,
    pub panel_upgrade_value: Money,
    pub items: Vec<ExtraItem>,
}

/// A lump-sum payment at a given month. The month is informational only;
/// the math treats balloons as principal reductions up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalloonPayment {
    pub value: Money,
    pub month: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceInput {
    pub enabled: bool,
    pub down_payment: Money,
    pub grace_months: f64,
    pub monthly_rate: Rate,
    pub installment_count: f64,
    pub balloon_payments: Vec<BalloonPayment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeInInput {
    pub enabled: bool,
    pub mode: TradeMode,
    pub value: Money,
}

/// The full request for one proposal calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalInput {
    pub dimensioning: DimensioningInput,
    pub kit: KitInput,
    pub structure: StructureInput,
    pub margin: MarginInput,
    pub extras: ExtrasInput,
    pub finance: FinanceInput,
    pub trade: TradeInInput,
    pub params: ProposalParamsOverride,
}

impl ProposalInput {
    /// Parse a request from a JSON string (CLI and bindings boundary).
    pub fn from_json_str(s: &str) -> crate::ProposalResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
