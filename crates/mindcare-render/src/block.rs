use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A contiguous span of text, bold or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InlineRun {
    pub text: String,
    pub bold: bool,
}

impl InlineRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// One rendered block. Blocks appear in the same order as their source lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum TextBlock {
    Paragraph { runs: Vec<InlineRun> },
    BulletList { items: Vec<Vec<InlineRun>> },
    NumberedList { items: Vec<Vec<InlineRun>> },
}

impl TextBlock {
    /// Concatenated text of a run sequence, markers removed.
    pub fn runs_text(runs: &[InlineRun]) -> String {
        runs.iter().map(|r| r.text.as_str()).collect()
    }
}
