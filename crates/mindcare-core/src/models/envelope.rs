use serde::{Deserialize, Serialize};
use crate::error::CoreError;

/// Wrapper the backend puts around every successful payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

fn default_success() -> bool {
    true
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, refusing envelopes the backend flagged as failed.
    pub fn into_data(self) -> Result<T, CoreError> {
        if !self.success {
            let message = if self.message.is_empty() {
                "request was not successful".to_string()
            } else {
                self.message
            };
            return Err(CoreError::Unsuccessful(message));
        }
        Ok(self.data)
    }
}
