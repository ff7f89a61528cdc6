pub mod amortization;
pub mod commission;
pub mod quote;
