//! Sizing & cost aggregation: array capacity, yield estimate, inverter
//! resolution and kit cost totals.

use crate::num::{or_zero, positive_or, positive_or_zero, round_count};
use crate::params::ProposalParams;
use crate::proposal::input::{DimensioningInput, InverterType, KitInput};
use crate::proposal::output::{DimensioningOutput, InverterOutput, KitOutput};

pub(crate) fn resolve_sizing(
    dim: &DimensioningInput,
    kit: &KitInput,
    params: &ProposalParams,
) -> (DimensioningOutput, KitOutput) {
    let module_count = or_zero(dim.module_count);
    let module_power_w = or_zero(dim.module_power_w);

    let system_kwp = module_count * module_power_w / 1000.0;
    let estimated_kwh = module_count * module_power_w * or_zero(dim.production_index) / 1000.0;

    // String path: explicit line items win over the aggregate fields.
    let line_items: Vec<_> = dim
        .string_inverters
        .iter()
        .filter(|it| {
            it.quantity.is_finite()
                && it.quantity > 0.0
                && it.unit_cost.is_finite()
                && it.power_kw.is_finite()
                && it.power_kw > 0.0
        })
        .collect();

    let (string_count, string_power_kw, string_cost) = if !line_items.is_empty() {
        let count: f64 = line_items.iter().map(|it| it.quantity).sum();
        let power: f64 = line_items.iter().map(|it| it.quantity * it.power_kw).sum();
        let cost: f64 = line_items.iter().map(|it| it.quantity * it.unit_cost).sum();
        (count, power, cost)
    } else {
        let count = positive_or_zero(dim.string_inverter_count);
        let oversizing = positive_or(dim.oversizing_factor, params.default_oversizing_factor);
        let derived_power = if oversizing > 0.0 {
            system_kwp / oversizing
        } else {
            0.0
        };
        let power = positive_or(dim.string_inverter_power_kw, derived_power);
        (count, power, or_zero(kit.string_inverter_total_cost))
    };

    // Micro path: the suggested count is always computed for display, the
    // explicit count wins when given.
    let divisor = positive_or_zero(params.micro_modules_per_unit);
    let suggested_micro_count = if divisor > 0.0 {
        round_count(module_count / divisor, params.micro_rounding)
    } else {
        0.0
    };
    let micro_count = positive_or(dim.micro_inverter_count, suggested_micro_count);
    let micro_power_total_kw = micro_count * or_zero(params.micro_unit_power_kw);

    // Only the selected family is billed.
    let inverter_total_cost = match dim.inverter_type {
        InverterType::String => string_cost,
        InverterType::Micro => micro_count * or_zero(kit.micro_inverter_unit_cost),
    };

    let module_unit_cost = or_zero(kit.module_cost_per_watt) * module_power_w;
    let modules_total_cost =
        module_count * (module_unit_cost + or_zero(kit.cabling_cost_per_module));
    let kit_cost = modules_total_cost + inverter_total_cost;

    let dimensioning = DimensioningOutput {
        system_kwp,
        estimated_kwh,
        inverter: InverterOutput {
            selected: dim.inverter_type,
            string_count,
            string_power_kw,
            micro_count,
            suggested_micro_count,
            micro_power_total_kw,
        },
    };
    let kit_out = KitOutput {
        module_unit_cost,
        modules_total_cost,
        inverter_total_cost,
        kit_cost,
    };
    (dimensioning, kit_out)
}
