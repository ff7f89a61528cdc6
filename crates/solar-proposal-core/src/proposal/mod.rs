//! The proposal pipeline: sizing → totals → finance, composed by
//! [`calculate_proposal`].

pub mod finance;
pub mod input;
pub mod output;
pub mod sizing;
pub mod totals;

use crate::params::ProposalParams;
use crate::proposal::input::ProposalInput;
use crate::proposal::output::{ProposalOutput, TradeOutput};
use crate::types::ProposalCalculation;

/// The single entry point of the engine.
///
/// Merges the input's partial params over the defaults, then resolves
/// sizing, totals and finance in sequence. Pure and total: any numeric
/// garbage in the input degrades to zeros in the output, never to a panic.
pub fn calculate_proposal(input: &ProposalInput) -> ProposalCalculation {
    let params = input.params.apply(&ProposalParams::default());

    let (dimensioning, kit) = sizing::resolve_sizing(&input.dimensioning, &input.kit, &params);

    let totals = totals::resolve_totals(
        &kit,
        &input.structure,
        &input.margin,
        &input.extras,
        &input.trade,
        &params,
    );

    let (finance, applied_trade_on_installments) = finance::resolve_finance(
        totals.totals.cash_total,
        &input.finance,
        &input.trade,
        &params,
    );

    let output = ProposalOutput {
        dimensioning,
        kit,
        structure: totals.structure,
        margin_value: totals.margin_value,
        extras_total: totals.extras_total,
        totals: totals.totals,
        finance,
        trade: TradeOutput {
            applied_on_total: totals.applied_trade_on_total,
            applied_on_installments: applied_trade_on_installments,
        },
    };

    ProposalCalculation {
        params,
        input: input.clone(),
        output,
        commission: None,
    }
}

#[cfg(test)]
mod tests {
    use super::input::*;
    use super::*;
    use crate::params::{DuplicationRule, ProposalParamsOverride};

    fn sample_input() -> ProposalInput {
        ProposalInput {
            dimensioning: DimensioningInput {
                module_count: 10.0,
                module_power_w: 550.0,
                production_index: 120.0,
                ..Default::default()
            },
            kit: KitInput {
                module_cost_per_watt: 1.2,
                cabling_cost_per_module: 5.0,
                ..Default::default()
            },
            structure: StructureInput {
                ground_panel_count: 10.0,
                ground_panel_unit_cost: 50.0,
                ..Default::default()
            },
            margin: MarginInput { percent: 0.2 },
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_quote() {
        let calc = calculate_proposal(&sample_input());
        let out = &calc.output;
        assert_eq!(out.dimensioning.system_kwp, 5.5);
        assert_eq!(out.kit.kit_cost, 6650.0);
        assert_eq!(out.totals.pre_margin_base, 14300.0);
        assert_eq!(out.margin_value, 2860.0);
        assert_eq!(out.totals.cash_total, 17160.0);
        assert_eq!(out.totals.kit_view, 6650.0);
        assert_eq!(out.totals.material_view, 7150.0);
        assert!(calc.commission.is_none());
    }

    #[test]
    fn test_params_override_flows_through() {
        let mut input = sample_input();
        input.params = ProposalParamsOverride {
            duplication_rule: Some(DuplicationRule::NoDuplication),
            ..Default::default()
        };
        let calc = calculate_proposal(&input);
        assert_eq!(calc.params.duplication_rule, DuplicationRule::NoDuplication);
        assert_eq!(calc.output.totals.pre_margin_base, 7150.0);
        // Untouched params keep their defaults in the echoed struct.
        assert_eq!(calc.params.default_oversizing_factor, 1.25);
    }

    #[test]
    fn test_financed_quote_with_trade_on_installments() {
        let mut input = sample_input();
        input.finance = FinanceInput {
            enabled: true,
            down_payment: 2_160.0,
            grace_months: 0.0,
            monthly_rate: 0.015,
            installment_count: 48.0,
            balloon_payments: vec![],
        };
        input.trade = TradeInInput {
            enabled: true,
            mode: TradeMode::Installments,
            value: 5_000.0,
        };
        let calc = calculate_proposal(&input);
        let fin = &calc.output.finance;
        assert_eq!(calc.output.trade.applied_on_installments, 5_000.0);
        assert_eq!(calc.output.trade.applied_on_total, 0.0);
        // 17160 - 2160 - 5000 = 10000 financed.
        assert_eq!(fin.financed_value, 10_000.0);
        let expected_pay = (0.015 * 10_000.0) / (1.0 - 1.015f64.powi(-48));
        assert!((fin.monthly_installment - expected_pay).abs() < 1e-9);
        assert!((fin.down_payment_percent - 2_160.0 / 17_160.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_yields_all_zero_output() {
        let calc = calculate_proposal(&ProposalInput::default());
        assert_eq!(calc.output.totals.cash_total, 0.0);
        assert_eq!(calc.output.finance.monthly_installment, 0.0);
        assert_eq!(calc.output.finance.down_payment_percent, 0.0);
    }

    #[test]
    fn test_totality_over_hostile_numeric_input() {
        let bad = [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
        for &v in &bad {
            let input = ProposalInput {
                dimensioning: DimensioningInput {
                    module_count: v,
                    module_power_w: v,
                    production_index: v,
                    oversizing_factor: v,
                    string_inverter_count: v,
                    string_inverter_power_kw: v,
                    micro_inverter_count: v,
                    string_inverters: vec![StringInverterItem {
                        quantity: v,
                        unit_cost: v,
                        power_kw: v,
                    }],
                    ..Default::default()
                },
                kit: KitInput {
                    module_cost_per_watt: v,
                    cabling_cost_per_module: v,
                    micro_inverter_unit_cost: v,
                    string_inverter_total_cost: v,
                },
                structure: StructureInput {
                    ground_panel_count: v,
                    ground_panel_unit_cost: v,
                    roof_panel_count: v,
                    roof_panel_unit_cost: v,
                },
                margin: MarginInput { percent: v },
                extras: ExtrasInput {
                    battery_value: v,
                    panel_upgrade_value: v,
                    items: vec![ExtraItem {
                        name: "x".into(),
                        value: v,
                    }],
                },
                finance: FinanceInput {
                    enabled: true,
                    down_payment: v,
                    grace_months: v,
                    monthly_rate: v,
                    installment_count: v,
                    balloon_payments: vec![BalloonPayment { value: v, month: v }],
                },
                trade: TradeInInput {
                    enabled: true,
                    mode: TradeMode::TotalValue,
                    value: v,
                },
                params: Default::default(),
            };
            let calc = calculate_proposal(&input);
            let fin = &calc.output.finance;
            assert!(fin.financed_value.is_finite() && fin.financed_value >= 0.0);
            assert!(fin.monthly_installment.is_finite() && fin.monthly_installment >= 0.0);
            assert!(fin.balance_after_grace.is_finite() && fin.balance_after_grace >= 0.0);
            assert!(calc.output.totals.cash_total.is_finite());
            assert!(calc.output.finance.down_payment_percent.is_finite());
        }
    }

    #[test]
    fn test_missing_fields_deserialize_to_zeros() {
        let input: ProposalInput = serde_json::from_str(
            r#"{"dimensioning": {"module_count": 8, "module_power_w": 450}}"#,
        )
        .unwrap();
        let calc = calculate_proposal(&input);
        assert_eq!(calc.output.dimensioning.system_kwp, 3.6);
        assert_eq!(calc.output.totals.cash_total, 0.0);
    }

    #[test]
    fn test_calculation_blob_round_trip() {
        let calc = calculate_proposal(&sample_input());
        let blob = serde_json::to_string(&calc).unwrap();
        let back = ProposalCalculation::from_json_str(&blob).unwrap();
        assert_eq!(back, calc);
    }
}
