mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{GraceBalanceArgs, InstallmentArgs, SolveRateArgs};
use commands::commission::CommissionArgs;
use commands::quote::QuoteArgs;

/// Solar proposal financial calculations
#[derive(Parser)]
#[command(
    name = "solq",
    version,
    about = "Solar proposal financial calculations",
    long_about = "Sizes a photovoltaic system, aggregates kit/structure costs, applies \
                  margin, extras and trade-in credits, and resolves financing \
                  (grace-period accrual, fixed installments, implied-rate solving). \
                  All numeric input is treated leniently: missing or malformed values \
                  count as zero and never abort a quote."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a full proposal quote
    Quote(QuoteArgs),
    /// Fixed monthly installment for a financed value
    Installment(InstallmentArgs),
    /// Solve the implied monthly rate for a desired installment
    SolveRate(SolveRateArgs),
    /// Balance owed after the grace period
    GraceBalance(GraceBalanceArgs),
    /// Commission on a resolved contract value
    Commission(CommissionArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Quote(args) => commands::quote::run_quote(args),
        Commands::Installment(args) => commands::amortization::run_installment(args),
        Commands::SolveRate(args) => commands::amortization::run_solve_rate(args),
        Commands::GraceBalance(args) => commands::amortization::run_grace_balance(args),
        Commands::Commission(args) => commands::commission::run_commission(args),
        Commands::Version => {
            println!("solq {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
