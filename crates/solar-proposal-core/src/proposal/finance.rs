//! Finance resolution: INSTALLMENTS-mode trade-in allocation, financed
//! amount, grace balance, installment, and interest totals.

use crate::amortization::{balance_after_grace, installment_from_rate};
use crate::num::or_zero;
use crate::params::ProposalParams;
use crate::proposal::input::{FinanceInput, TradeInInput, TradeMode};
use crate::proposal::output::FinanceOutput;
use crate::types::Money;

pub(crate) fn resolve_finance(
    cash_total: Money,
    finance: &FinanceInput,
    trade: &TradeInInput,
    params: &ProposalParams,
) -> (FinanceOutput, Money) {
    let down_payment = or_zero(finance.down_payment);
    let balloons_total: f64 = finance
        .balloon_payments
        .iter()
        .map(|b| or_zero(b.value))
        .sum();

    // Trade against the financed portion: capped at what remains after the
    // down payment and balloons, never below zero.
    let max_installment_trade = (cash_total - down_payment - balloons_total).max(0.0);
    let applied_trade_on_installments =
        if trade.enabled && trade.mode == TradeMode::Installments && finance.enabled {
            or_zero(trade.value).min(max_installment_trade)
        } else {
            0.0
        };

    let down_payment_percent = if cash_total > 0.0 {
        down_payment / cash_total
    } else {
        0.0
    };

    let financed_value =
        (cash_total - down_payment - balloons_total - applied_trade_on_installments).max(0.0);

    let grace_balance = balance_after_grace(
        financed_value,
        finance.monthly_rate,
        finance.grace_months,
        params.grace_interest,
    );

    let monthly_installment = if finance.enabled {
        installment_from_rate(
            financed_value,
            finance.monthly_rate,
            finance.grace_months,
            params.grace_interest,
            finance.installment_count,
        )
    } else {
        0.0
    };

    let total_paid = if finance.enabled {
        down_payment + monthly_installment * or_zero(finance.installment_count) + balloons_total
    } else {
        cash_total
    };

    let interest_paid = (total_paid - (cash_total - applied_trade_on_installments)).max(0.0);

    let output = FinanceOutput {
        down_payment_percent,
        financed_value,
        balance_after_grace: grace_balance,
        monthly_installment,
        total_paid,
        interest_paid,
    };
    (output, applied_trade_on_installments)
}
