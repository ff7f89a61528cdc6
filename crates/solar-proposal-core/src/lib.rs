pub mod amortization;
pub mod error;
pub mod num;
pub mod params;
pub mod proposal;
pub mod types;

#[cfg(feature = "commission")]
pub mod commission;

pub use error::ProposalError;
pub use params::*;
pub use proposal::calculate_proposal;
pub use types::*;

/// Standard result type for fallible (serialization-boundary) operations.
/// The engine proper is total and returns plain values.
pub type ProposalResult<T> = Result<T, ProposalError>;
