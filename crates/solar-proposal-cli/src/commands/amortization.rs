use clap::Args;
use serde_json::{json, Value};

use solar_proposal_core::amortization::{
    balance_after_grace, installment_from_rate, solve_rate_from_installment,
};
use solar_proposal_core::GraceInterestMode;

/// Arguments for the forward installment calculation.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct InstallmentArgs {
    /// Financed value
    #[arg(long)]
    pub financed_value: f64,

    /// Monthly interest rate as a fraction (e.g. 0.015 for 1.5%)
    #[arg(long)]
    pub monthly_rate: f64,

    /// Grace period in months (carência)
    #[arg(long, default_value = "0")]
    pub grace_months: f64,

    /// Accrue simple instead of compound interest during the grace period
    #[arg(long)]
    pub simple_interest: bool,

    /// Number of installments
    #[arg(long)]
    pub installments: f64,
}

/// Arguments for the inverse rate solver.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SolveRateArgs {
    /// Desired installment amount
    #[arg(long)]
    pub installment: f64,

    /// Financed value
    #[arg(long)]
    pub financed_value: f64,

    /// Grace period in months (carência)
    #[arg(long, default_value = "0")]
    pub grace_months: f64,

    /// Accrue simple instead of compound interest during the grace period
    #[arg(long)]
    pub simple_interest: bool,

    /// Number of installments
    #[arg(long)]
    pub installments: f64,
}

/// Arguments for the grace-balance calculation.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct GraceBalanceArgs {
    /// Financed value
    #[arg(long)]
    pub financed_value: f64,

    /// Monthly interest rate as a fraction
    #[arg(long)]
    pub monthly_rate: f64,

    /// Grace period in months (carência)
    #[arg(long)]
    pub grace_months: f64,

    /// Accrue simple instead of compound interest during the grace period
    #[arg(long)]
    pub simple_interest: bool,
}

fn grace_mode(simple: bool) -> GraceInterestMode {
    if simple {
        GraceInterestMode::Simple
    } else {
        GraceInterestMode::Compound
    }
}

pub fn run_installment(args: InstallmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mode = grace_mode(args.simple_interest);
    let balance =
        balance_after_grace(args.financed_value, args.monthly_rate, args.grace_months, mode);
    let installment = installment_from_rate(
        args.financed_value,
        args.monthly_rate,
        args.grace_months,
        mode,
        args.installments,
    );
    let total_paid = installment * args.installments.max(0.0);
    Ok(json!({
        "financed_value": args.financed_value,
        "balance_after_grace": balance,
        "monthly_installment": installment,
        "total_paid": total_paid,
        "total_interest": (total_paid - args.financed_value).max(0.0),
    }))
}

pub fn run_solve_rate(args: SolveRateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mode = grace_mode(args.simple_interest);
    let monthly_rate = solve_rate_from_installment(
        args.installment,
        args.financed_value,
        args.grace_months,
        mode,
        args.installments,
    );
    // Echo the installment the solved rate actually produces so callers can
    // see the bisection residual.
    let reproduced = installment_from_rate(
        args.financed_value,
        monthly_rate,
        args.grace_months,
        mode,
        args.installments,
    );
    Ok(json!({
        "monthly_rate": monthly_rate,
        "desired_installment": args.installment,
        "installment_at_rate": reproduced,
    }))
}

pub fn run_grace_balance(args: GraceBalanceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let balance = balance_after_grace(
        args.financed_value,
        args.monthly_rate,
        args.grace_months,
        grace_mode(args.simple_interest),
    );
    Ok(json!({
        "financed_value": args.financed_value,
        "grace_months": args.grace_months,
        "balance_after_grace": balance,
    }))
}
