use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Latest PHQ-9 and GAD-7 results for one user.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentScoresSummary {
    pub user_id: String,
    pub phq9_score: u32,
    #[serde(default)]
    pub phq9_severity: String,
    #[serde(default, with = "crate::time::lenient_option")]
    #[ts(type = "string | null")]
    pub phq9_date: Option<jiff::Timestamp>,
    pub gad7_score: u32,
    #[serde(default)]
    pub gad7_severity: String,
    #[serde(default, with = "crate::time::lenient_option")]
    #[ts(type = "string | null")]
    pub gad7_date: Option<jiff::Timestamp>,
}

/// Body of `POST /api/Assessment/submit`. `kind` is the wire discriminator
/// (`"PHQ-9"` or `"GAD-7"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentSubmission {
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub score: u32,
    #[serde(default)]
    pub severity: String,
    #[serde(with = "crate::time::lenient")]
    #[ts(type = "string")]
    pub created_at: jiff::Timestamp,
}
