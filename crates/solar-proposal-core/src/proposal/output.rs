//! Output value types. Mirrors the input structure; every field is derived
//! deterministically from the input.

use serde::{Deserialize, Serialize};

use crate::proposal::input::InverterType;
use crate::types::{Money, Rate};

/// Resolved inverter quantities and powers. Both families are reported for
/// display; only the selected one contributes to `inverter_total_cost` in
/// [`KitOutput`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InverterOutput {
    pub selected: InverterType,
    pub string_count: f64,
    pub string_power_kw: f64,
    pub micro_count: f64,
    pub suggested_micro_count: f64,
    pub micro_power_total_kw: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensioningOutput {
    pub system_kwp: f64,
    pub estimated_kwh: f64,
    pub inverter: InverterOutput,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitOutput {
    pub module_unit_cost: Money,
    pub modules_total_cost: Money,
    pub inverter_total_cost: Money,
    pub kit_cost: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureOutput {
    pub ground_value: Money,
    pub roof_value: Money,
    pub total_value: Money,
}

/// Billed totals plus the two reporting views.
///
/// The views always report un-duplicated unit-level costs while the totals
/// reflect the duplication rule. That asymmetry is deliberate: views show
/// what one unit costs, totals show what is billed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalsOutput {
    /// Kit + structure after the duplication rule, before margin and extras.
    pub pre_margin_base: Money,
    /// Base + margin + extras, before any trade-in credit.
    pub gross_cash_total: Money,
    /// Final cash price after a TOTAL_VALUE trade-in.
    pub cash_total: Money,
    pub kit_view: Money,
    pub material_view: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceOutput {
    pub down_payment_percent: Rate,
    pub financed_value: Money,
    pub balance_after_grace: Money,
    pub monthly_installment: Money,
    pub total_paid: Money,
    pub interest_paid: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeOutput {
    pub applied_on_total: Money,
    pub applied_on_installments: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalOutput {
    pub dimensioning: DimensioningOutput,
    pub kit: KitOutput,
    pub structure: StructureOutput,
    pub margin_value: Money,
    pub extras_total: Money,
    pub totals: TotalsOutput,
    pub finance: FinanceOutput,
    pub trade: TradeOutput,
}
