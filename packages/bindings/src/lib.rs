use napi::Result as NapiResult;
use napi_derive::napi;

use solar_proposal_core::proposal::input::ProposalInput;
use solar_proposal_core::{GraceInterestMode, ProposalCalculation};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn grace_mode(simple_interest: bool) -> GraceInterestMode {
    if simple_interest {
        GraceInterestMode::Simple
    } else {
        GraceInterestMode::Compound
    }
}

// ---------------------------------------------------------------------------
// Proposal engine
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_proposal(input_json: String) -> NapiResult<String> {
    let input: ProposalInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let calculation = solar_proposal_core::calculate_proposal(&input);
    serde_json::to_string(&calculation).map_err(to_napi_error)
}

/// Attach a commission to a persisted calculation blob and return the
/// updated blob.
#[napi]
pub fn attach_commission(
    calculation_json: String,
    fallback_value: f64,
    configured_percent: Option<f64>,
) -> NapiResult<String> {
    let calculation =
        ProposalCalculation::from_json_str(&calculation_json).map_err(to_napi_error)?;
    let updated = calculation.with_commission(fallback_value, configured_percent);
    serde_json::to_string(&updated).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization helpers
// ---------------------------------------------------------------------------

#[napi]
pub fn balance_after_grace(
    financed_value: f64,
    monthly_rate: f64,
    grace_months: f64,
    simple_interest: bool,
) -> f64 {
    solar_proposal_core::amortization::balance_after_grace(
        financed_value,
        monthly_rate,
        grace_months,
        grace_mode(simple_interest),
    )
}

#[napi]
pub fn installment_from_rate(
    financed_value: f64,
    monthly_rate: f64,
    grace_months: f64,
    simple_interest: bool,
    installments: f64,
) -> f64 {
    solar_proposal_core::amortization::installment_from_rate(
        financed_value,
        monthly_rate,
        grace_months,
        grace_mode(simple_interest),
        installments,
    )
}

#[napi]
pub fn solve_rate_from_installment(
    desired_installment: f64,
    financed_value: f64,
    grace_months: f64,
    simple_interest: bool,
    installments: f64,
) -> f64 {
    solar_proposal_core::amortization::solve_rate_from_installment(
        desired_installment,
        financed_value,
        grace_months,
        grace_mode(simple_interest),
        installments,
    )
}
