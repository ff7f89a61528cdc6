use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProposalError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ProposalError {
    fn from(e: serde_json::Error) -> Self {
        ProposalError::SerializationError(e.to_string())
    }
}
