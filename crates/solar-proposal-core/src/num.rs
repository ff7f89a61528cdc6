//! Boundary coercion helpers.
//!
//! The engine is total over "numeric-ish" input: absent or non-finite values
//! collapse to 0 before any arithmetic so that NaN never propagates into a
//! quote. Every input field passes through one of these at the point of use.

use crate::params::RoundingMode;

/// Non-finite values (NaN, ±Infinity) become 0.
pub fn or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Keep `x` only when finite and strictly positive, else 0.
pub fn positive_or_zero(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 {
        x
    } else {
        0.0
    }
}

/// `x` when finite and strictly positive, else the fallback.
pub fn positive_or(x: f64, fallback: f64) -> f64 {
    if x.is_finite() && x > 0.0 {
        x
    } else {
        fallback
    }
}

/// Apply the configured rounding policy to a unit count.
///
/// ROUND is round-half-up. Non-finite input returns 0.
pub fn round_count(x: f64, mode: RoundingMode) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    match mode {
        RoundingMode::Ceil => x.ceil(),
        RoundingMode::Floor => x.floor(),
        RoundingMode::Round => (x + 0.5).floor(),
    }
}
