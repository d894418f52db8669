use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Sentinel stored for a question that has not been answered yet.
pub const UNANSWERED: i32 = -1;

/// One choice on the shared frequency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseOption {
    pub value: u8,
    pub label: &'static str,
}

/// "Over the last 2 weeks, how often...": identical for PHQ-9 and GAD-7.
pub static RESPONSE_SCALE: [ResponseOption; 4] = [
    ResponseOption {
        value: 0,
        label: "Not at all",
    },
    ResponseOption {
        value: 1,
        label: "Several days",
    },
    ResponseOption {
        value: 2,
        label: "More than half the days",
    },
    ResponseOption {
        value: 3,
        label: "Nearly every day",
    },
];

/// Named severity tier derived from a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    #[serde(rename = "Moderately Severe")]
    ModeratelySevere,
    Severe,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::ModeratelySevere => "Moderately Severe",
            Severity::Severe => "Severe",
        }
    }

    pub fn bucket(self) -> SeverityBucket {
        match self {
            Severity::Minimal | Severity::Mild => SeverityBucket::Low,
            Severity::Moderate => SeverityBucket::Medium,
            Severity::ModeratelySevere | Severity::Severe => SeverityBucket::High,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative presentation bucket. Drives display color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBucket {
    Low,
    Medium,
    High,
}

impl SeverityBucket {
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityBucket::Low => "low",
            SeverityBucket::Medium => "medium",
            SeverityBucket::High => "high",
        }
    }

    /// Text color class used by the web UI.
    pub fn color_class(self) -> &'static str {
        match self {
            SeverityBucket::Low => "text-stress-low",
            SeverityBucket::Medium => "text-stress-medium",
            SeverityBucket::High => "text-stress-high",
        }
    }

    /// Background class used by the web UI.
    pub fn background_class(self) -> &'static str {
        match self {
            SeverityBucket::Low => "bg-stress-low/20",
            SeverityBucket::Medium => "bg-stress-medium/20",
            SeverityBucket::High => "bg-stress-high/20",
        }
    }
}

/// A closed band `..=upper` mapping to one severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityBand {
    pub upper: u32,
    pub severity: Severity,
}

/// Totals above this suggest reaching out for support.
pub const ATTENTION_THRESHOLD: u32 = 9;

/// Total and severity for one answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreResult {
    pub total: u32,
    pub max_score: u32,
    pub severity: Severity,
    pub bucket: SeverityBucket,
    pub needs_attention: bool,
}

impl ScoreResult {
    pub fn new(total: u32, max_score: u32, severity: Severity) -> Self {
        Self {
            total,
            max_score,
            severity,
            bucket: severity.bucket(),
            needs_attention: total > ATTENTION_THRESHOLD,
        }
    }

    pub fn severity_label(&self) -> &'static str {
        self.severity.label()
    }

    pub fn severity_color_class(&self) -> &'static str {
        self.bucket.color_class()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    /// Offending question index, or `None` for a wrong-length answer set.
    pub index: Option<usize>,
    pub value: i32,
    pub message: String,
}
