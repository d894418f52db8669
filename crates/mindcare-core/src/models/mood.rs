use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MoodEntry {
    pub id: String,
    pub user_id: String,
    pub mood: String,
    #[serde(default)]
    pub note: String,
    #[serde(with = "crate::time::lenient")]
    #[ts(type = "string")]
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateMoodRequest {
    pub user_id: String,
    pub mood: String,
    pub note: String,
}
