use std::collections::HashMap;

use thiserror::Error;

use mindcare_core::error::CoreError;
use mindcare_instruments::error::InstrumentError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered 401. The token store has already been cleared.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        errors: Option<HashMap<String, Vec<String>>>,
    },

    #[error("No response from server. Please check your connection. ({0})")]
    NoResponse(String),

    #[error("response did not match the expected schema: {0}")]
    Decode(String),

    #[error("request rejected by backend: {0}")]
    Rejected(String),

    #[error("token storage error: {0}")]
    Storage(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("request error: {0}")]
    Request(String),

    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::NoResponse(e.to_string())
        } else if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Request(e.to_string())
        }
    }
}

impl From<CoreError> for ClientError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Unsuccessful(message) => ClientError::Rejected(message),
            CoreError::Serialization(e) => ClientError::Decode(e.to_string()),
            other => ClientError::Decode(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::Storage(e.to_string())
    }
}
