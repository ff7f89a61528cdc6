use serde::{Deserialize, Serialize};

use crate::params::ProposalParams;
use crate::proposal::input::ProposalInput;
use crate::proposal::output::ProposalOutput;
use crate::ProposalResult;

/// Monetary values. IEEE-754 doubles: the engine coerces non-finite input to
/// zero at every boundary, so outputs are always finite.
pub type Money = f64;

/// Rates expressed as decimals (0.01 = 1% per month). Never as percentages.
pub type Rate = f64;

/// Commission attached to a resolved proposal by the caller, post-hoc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commission {
    /// Normalized fraction (0.03, never 3).
    pub percent: Rate,
    pub value: Money,
    pub base_value: Money,
}

/// The complete result of one engine run: the merged params, the input as
/// received, and the resolved output. Persisted by callers as an opaque JSON
/// blob on the proposal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalCalculation {
    pub params: ProposalParams,
    pub input: ProposalInput,
    pub output: ProposalOutput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<Commission>,
}

impl ProposalCalculation {
    /// Serialize to the JSON value persisted on the proposal record.
    pub fn to_json_value(&self) -> ProposalResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Re-hydrate a persisted calculation blob.
    pub fn from_json_str(s: &str) -> ProposalResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
