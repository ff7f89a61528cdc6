//! Amortization math: grace-period accrual, forward annuity payment, and the
//! inverse rate solver.
//!
//! All three functions are total: degenerate input (non-finite, zero or
//! negative where a positive quantity is required) returns 0 rather than
//! panicking or producing NaN. Financial preview callers feed these
//! partially-filled forms and must always get a number back.

use crate::params::GraceInterestMode;
use crate::types::{Money, Rate};

/// Bracket search starts here and doubles until the target is covered.
const BRACKET_START_RATE: f64 = 0.05;
/// Ceiling for the monthly rate: 300% per month. Targets beyond this
/// saturate rather than loop.
const MAX_MONTHLY_RATE: f64 = 3.0;
/// Fixed bisection depth. 80 halvings of the bracket reach well below f64
/// resolution for any realistic rate.
const BISECTION_ITERATIONS: u32 = 80;

/// Balance owed after the grace period (carência), before installments start.
///
/// Returns 0 for a non-positive or non-finite financed value. A non-finite or
/// negative rate, or a non-positive grace period, means no accrual: the
/// financed value passes through unchanged.
pub fn balance_after_grace(
    financed_value: Money,
    monthly_rate: Rate,
    grace_months: f64,
    grace_interest: GraceInterestMode,
) -> Money {
    if !financed_value.is_finite() || financed_value <= 0.0 {
        return 0.0;
    }
    if !monthly_rate.is_finite() || monthly_rate < 0.0 {
        return financed_value;
    }
    if !grace_months.is_finite() || grace_months <= 0.0 {
        return financed_value;
    }
    match grace_interest {
        GraceInterestMode::Compound => financed_value * (1.0 + monthly_rate).powf(grace_months),
        GraceInterestMode::Simple => financed_value * (1.0 + monthly_rate * grace_months),
    }
}

/// Fixed monthly payment that amortizes the grace-adjusted balance over
/// `installments` months at `monthly_rate` (standard annuity PMT).
///
/// Zero rate degenerates to straight division. Returns 0 for non-positive
/// installment counts, rates below zero, or a non-positive balance.
pub fn installment_from_rate(
    financed_value: Money,
    monthly_rate: Rate,
    grace_months: f64,
    grace_interest: GraceInterestMode,
    installments: f64,
) -> Money {
    if !installments.is_finite() || installments <= 0.0 {
        return 0.0;
    }
    if !monthly_rate.is_finite() || monthly_rate < 0.0 {
        return 0.0;
    }
    let balance = balance_after_grace(financed_value, monthly_rate, grace_months, grace_interest);
    if balance <= 0.0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return balance / installments;
    }
    let discount = 1.0 - (1.0 + monthly_rate).powf(-installments);
    if discount == 0.0 {
        return 0.0;
    }
    (monthly_rate * balance) / discount
}

/// Monthly rate implied by a desired installment amount, found by bisection.
///
/// The annuity formula has no closed-form inverse in the rate, but the
/// installment is monotonically increasing in it, so an exponential bracket
/// search followed by bisection converges. The final upper bound is returned
/// (not the bracket midpoint): the result is the supremum of rates producing
/// at most the desired installment, up to bisection precision.
///
/// Targets at or below the zero-rate installment return 0; targets beyond
/// the rate ceiling saturate at the ceiling.
pub fn solve_rate_from_installment(
    desired_installment: Money,
    financed_value: Money,
    grace_months: f64,
    grace_interest: GraceInterestMode,
    installments: f64,
) -> Rate {
    if !desired_installment.is_finite() || desired_installment <= 0.0 {
        return 0.0;
    }
    if !financed_value.is_finite() || financed_value <= 0.0 {
        return 0.0;
    }
    if !installments.is_finite() || installments <= 0.0 {
        return 0.0;
    }

    let at_zero_rate =
        installment_from_rate(financed_value, 0.0, grace_months, grace_interest, installments);
    if desired_installment <= at_zero_rate {
        return 0.0;
    }

    let pay_at = |rate: Rate| {
        installment_from_rate(financed_value, rate, grace_months, grace_interest, installments)
    };

    let mut high = BRACKET_START_RATE;
    while pay_at(high) < desired_installment && high < MAX_MONTHLY_RATE {
        high = (high * 2.0).min(MAX_MONTHLY_RATE);
    }
    if pay_at(high) < desired_installment {
        // Unreachable even at the ceiling: saturate.
        return high;
    }

    let mut low = 0.0;
    for _ in 0..BISECTION_ITERATIONS {
        let mid = (low + high) / 2.0;
        if pay_at(mid) >= desired_installment {
            high = mid;
        } else {
            low = mid;
        }
    }

    high
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    /// Present value of `installment` paid monthly for `n` months at `rate`.
    fn present_value(installment: f64, rate: f64, n: u32) -> f64 {
        (1..=n).map(|t| installment / (1.0 + rate).powi(t as i32)).sum()
    }

    #[test]
    fn test_grace_balance_compound() {
        let balance =
            balance_after_grace(50_000.0, 0.01, 3.0, GraceInterestMode::Compound);
        let expected = 50_000.0 * 1.01f64.powi(3);
        assert!((balance - expected).abs() < 1e-9);
    }

    #[test]
    fn test_grace_balance_simple() {
        let balance = balance_after_grace(50_000.0, 0.01, 3.0, GraceInterestMode::Simple);
        assert!((balance - 51_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_grace_balance_no_accrual_paths() {
        // Zero or negative grace: value passes through.
        assert_eq!(
            balance_after_grace(1000.0, 0.02, 0.0, GraceInterestMode::Compound),
            1000.0
        );
        // Negative or non-finite rate: value passes through.
        assert_eq!(
            balance_after_grace(1000.0, -0.5, 6.0, GraceInterestMode::Compound),
            1000.0
        );
        assert_eq!(
            balance_after_grace(1000.0, f64::NAN, 6.0, GraceInterestMode::Compound),
            1000.0
        );
        // Degenerate principal: zero.
        assert_eq!(
            balance_after_grace(0.0, 0.02, 6.0, GraceInterestMode::Compound),
            0.0
        );
        assert_eq!(
            balance_after_grace(f64::INFINITY, 0.02, 6.0, GraceInterestMode::Compound),
            0.0
        );
    }

    #[test]
    fn test_installment_zero_rate_is_straight_division() {
        let pay =
            installment_from_rate(12_000.0, 0.0, 0.0, GraceInterestMode::Compound, 24.0);
        assert_eq!(pay, 500.0);
    }

    #[test]
    fn test_annuity_identity() {
        // Paying the computed installment for n months at the rate must
        // amortize the balance exactly (PV of the annuity == balance).
        let cases = [
            (50_000.0, 0.01, 0.0, 60.0),
            (120_000.0, 0.015, 6.0, 120.0),
            (8_000.0, 0.025, 2.0, 12.0),
        ];
        for (pv, rate, grace, n) in cases {
            let pay =
                installment_from_rate(pv, rate, grace, GraceInterestMode::Compound, n);
            let balance = balance_after_grace(pv, rate, grace, GraceInterestMode::Compound);
            let recovered = present_value(pay, rate, n as u32);
            assert!(
                (recovered - balance).abs() / balance < 1e-6,
                "annuity identity failed for pv={pv} rate={rate}: {recovered} vs {balance}"
            );
        }
    }

    #[test]
    fn test_finance_scenario_50k_3_months_grace() {
        let balance = balance_after_grace(50_000.0, 0.01, 3.0, GraceInterestMode::Compound);
        assert!((balance - 51_515.05).abs() < 0.01);
        let pay = installment_from_rate(50_000.0, 0.01, 3.0, GraceInterestMode::Compound, 60.0);
        let expected = (0.01 * balance) / (1.0 - 1.01f64.powi(-60));
        assert!((pay - expected).abs() < 1e-9);
        assert!((pay - 1145.92).abs() < 0.05);
    }

    #[test]
    fn test_installment_monotonic_in_rate() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let a: f64 = rng.gen_range(0.0..0.3);
            let b: f64 = rng.gen_range(0.0..0.3);
            let (r1, r2) = if a <= b { (a, b) } else { (b, a) };
            let p1 = installment_from_rate(30_000.0, r1, 0.0, GraceInterestMode::Compound, 48.0);
            let p2 = installment_from_rate(30_000.0, r2, 0.0, GraceInterestMode::Compound, 48.0);
            assert!(p1 <= p2 + 1e-9, "not monotone: pay({r1})={p1} > pay({r2})={p2}");
        }
    }

    #[test]
    fn test_solver_round_trip() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let rate: f64 = rng.gen_range(0.001..0.25);
            let target =
                installment_from_rate(40_000.0, rate, 0.0, GraceInterestMode::Compound, 60.0);
            let solved =
                solve_rate_from_installment(target, 40_000.0, 0.0, GraceInterestMode::Compound, 60.0);
            let reproduced =
                installment_from_rate(40_000.0, solved, 0.0, GraceInterestMode::Compound, 60.0);
            assert!(
                (reproduced - target).abs() < 1e-6,
                "round trip failed: rate={rate} solved={solved}"
            );
            // Upper-bound bias: the solved rate never undershoots the true
            // rate by more than bisection precision.
            assert!(solved >= rate - 1e-12);
        }
    }

    #[test]
    fn test_solver_round_trip_with_grace() {
        let target =
            installment_from_rate(80_000.0, 0.018, 4.0, GraceInterestMode::Simple, 96.0);
        let solved =
            solve_rate_from_installment(target, 80_000.0, 4.0, GraceInterestMode::Simple, 96.0);
        assert!((solved - 0.018).abs() < 1e-10);
    }

    #[test]
    fn test_solver_unreachable_target_returns_zero() {
        // Target at or below the zero-rate installment is answered with 0.
        let at_zero = 40_000.0 / 60.0;
        assert_eq!(
            solve_rate_from_installment(at_zero, 40_000.0, 0.0, GraceInterestMode::Compound, 60.0),
            0.0
        );
        assert_eq!(
            solve_rate_from_installment(100.0, 40_000.0, 0.0, GraceInterestMode::Compound, 60.0),
            0.0
        );
    }

    #[test]
    fn test_solver_saturates_at_rate_ceiling() {
        // An absurd target (far beyond 300%/month) saturates instead of looping.
        let solved = solve_rate_from_installment(
            f64::MAX / 2.0,
            1_000.0,
            0.0,
            GraceInterestMode::Compound,
            12.0,
        );
        assert_eq!(solved, 3.0);
    }

    #[test]
    fn test_totality_over_degenerate_inputs() {
        let bad = [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
        for &v in &bad {
            for &w in &bad {
                let b = balance_after_grace(v, w, w, GraceInterestMode::Compound);
                assert!(b.is_finite() && b >= 0.0);
                let p = installment_from_rate(v, w, w, GraceInterestMode::Simple, w);
                assert!(p.is_finite() && p >= 0.0);
                let r = solve_rate_from_installment(v, w, w, GraceInterestMode::Compound, w);
                assert!(r.is_finite() && r >= 0.0);
            }
        }
    }
}
