use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
    #[serde(default)]
    pub sentiment: String,
    #[serde(with = "crate::time::lenient")]
    #[ts(type = "string")]
    pub timestamp: jiff::Timestamp,
}

impl ChatMessage {
    /// Anything the backend did not mark as `user` is a bot reply.
    pub fn is_from_user(&self) -> bool {
        self.sender.eq_ignore_ascii_case("user")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChatSessionDetail {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(with = "crate::time::lenient")]
    #[ts(type = "string")]
    pub session_start: jiff::Timestamp,
    #[serde(default, with = "crate::time::lenient_option")]
    #[ts(type = "string | null")]
    pub session_end: Option<jiff::Timestamp>,
    #[serde(default)]
    pub detected_stress_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChatSessionSummary {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub message_count: u32,
    #[serde(with = "crate::time::lenient")]
    #[ts(type = "string")]
    pub session_start: jiff::Timestamp,
    #[serde(default, with = "crate::time::lenient_option")]
    #[ts(type = "string | null")]
    pub session_end: Option<jiff::Timestamp>,
    #[serde(default)]
    pub detected_stress_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateChatSessionRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SendMessageRequest {
    pub session_id: String,
    pub message: String,
}

/// The backend's answer to a chat message. `bot_reply` is the plain text
/// handed to the structured-text renderer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SendMessageResponse {
    pub session_id: String,
    pub bot_reply: String,
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub stress_level: String,
    #[serde(with = "crate::time::lenient")]
    #[ts(type = "string")]
    pub timestamp: jiff::Timestamp,
}
