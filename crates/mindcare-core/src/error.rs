use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("backend reported failure: {0}")]
    Unsuccessful(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
