//! Duplication rule, margin, extras and the cash total, plus the TOTAL_VALUE
//! trade-in application.

use crate::num::or_zero;
use crate::params::{DuplicationRule, ProposalParams};
use crate::proposal::input::{ExtrasInput, MarginInput, StructureInput, TradeInInput, TradeMode};
use crate::proposal::output::{KitOutput, StructureOutput, TotalsOutput};
use crate::types::Money;

pub(crate) struct TotalsResolution {
    pub structure: StructureOutput,
    pub margin_value: Money,
    pub extras_total: Money,
    pub totals: TotalsOutput,
    pub applied_trade_on_total: Money,
}

pub(crate) fn resolve_totals(
    kit: &KitOutput,
    structure: &StructureInput,
    margin: &MarginInput,
    extras: &ExtrasInput,
    trade: &TradeInInput,
    params: &ProposalParams,
) -> TotalsResolution {
    let ground_value = or_zero(structure.ground_panel_count) * or_zero(structure.ground_panel_unit_cost);
    let roof_value = or_zero(structure.roof_panel_count) * or_zero(structure.roof_panel_unit_cost);
    let structure_out = StructureOutput {
        ground_value,
        roof_value,
        total_value: ground_value + roof_value,
    };

    // Kit and ground structure exist once per unit, roof capacity only once.
    let pre_margin_base = match params.duplication_rule {
        DuplicationRule::DuplicateKitAndGroundStructure => {
            (kit.kit_cost + ground_value) * 2.0 + roof_value
        }
        DuplicationRule::NoDuplication => kit.kit_cost + ground_value + roof_value,
    };

    let margin_value = pre_margin_base * or_zero(margin.percent);

    let extras_total = or_zero(extras.battery_value)
        + or_zero(extras.panel_upgrade_value)
        + extras.items.iter().map(|it| or_zero(it.value)).sum::<f64>();

    let gross_cash_total = pre_margin_base + margin_value + extras_total;

    let applied_trade_on_total = if trade.enabled && trade.mode == TradeMode::TotalValue {
        or_zero(trade.value).min(gross_cash_total.max(0.0))
    } else {
        0.0
    };

    let cash_total = gross_cash_total - applied_trade_on_total;

    // Views report un-duplicated unit-level costs regardless of the rule.
    let totals = TotalsOutput {
        pre_margin_base,
        gross_cash_total,
        cash_total,
        kit_view: kit.kit_cost,
        material_view: kit.modules_total_cost + structure_out.total_value,
    };

    TotalsResolution {
        structure: structure_out,
        margin_value,
        extras_total,
        totals,
        applied_trade_on_total,
    }
}
