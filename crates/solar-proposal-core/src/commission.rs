//! Commission on a resolved contract value.
//!
//! Sales rules store the rate ambiguously as either a whole-number
//! percentage (`3`) or a fraction (`0.03`); anything above 1 is read as a
//! percentage and divided by 100.

use crate::num::or_zero;
use crate::types::{Commission, Money, ProposalCalculation, Rate};

/// Default rate when no rule is configured: 3%.
pub const DEFAULT_COMMISSION_PERCENT: f64 = 3.0;

/// Normalize a configured raw rate into a fraction.
pub fn normalize_commission_rate(configured: Option<f64>) -> Rate {
    let raw = configured
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(DEFAULT_COMMISSION_PERCENT);
    if raw > 1.0 {
        raw / 100.0
    } else {
        raw
    }
}

/// Commission over the resolved cash total, falling back to a caller-supplied
/// contract value when the calculation carries no positive total.
pub fn calculate_commission(
    calculation: &ProposalCalculation,
    fallback_value: Money,
    configured: Option<f64>,
) -> Commission {
    let cash_total = or_zero(calculation.output.totals.cash_total);
    let base_value = if cash_total > 0.0 {
        cash_total
    } else {
        or_zero(fallback_value)
    };
    let percent = normalize_commission_rate(configured);
    Commission {
        percent,
        value: base_value * percent,
        base_value,
    }
}

impl ProposalCalculation {
    /// Attach a commission computed per the configured rule. Called by the
    /// contract layer after the engine run, before persisting the blob.
    pub fn with_commission(mut self, fallback_value: Money, configured: Option<f64>) -> Self {
        self.commission = Some(calculate_commission(&self, fallback_value, configured));
        self
    }
}
