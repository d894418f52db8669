//! mindcare-instruments
//!
//! Self-assessment questionnaire definitions and scoring. Pure data, no
//! HTTP dependency. Each instrument fixes its questions, the response
//! scale, and the thresholds that turn a total into a severity band.

pub mod error;
pub mod instruments;
pub mod mood;
pub mod questionnaire;
pub mod scoring;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use error::InstrumentError;
use scoring::{
    RESPONSE_SCALE, ResponseOption, ScoreResult, Severity, SeverityBand, ValidationError,
};

/// Trait implemented by each screening questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// Discriminator the backend expects in `AssessmentSubmission.type`.
    fn wire_type(&self) -> &str;

    /// One-line description shown under the questionnaire title.
    fn description(&self) -> &str;

    /// The ordered question texts.
    fn questions(&self) -> &[&'static str];

    /// Severity thresholds, ascending by upper bound. The last band is
    /// open-ended.
    fn bands(&self) -> &[SeverityBand];

    /// "What this means" text for a total score.
    fn guidance(&self, total: u32) -> &'static str;

    /// The response scale every question is answered on.
    fn options(&self) -> &[ResponseOption] {
        &RESPONSE_SCALE
    }

    fn question_count(&self) -> usize {
        self.questions().len()
    }

    fn max_score(&self) -> u32 {
        let top = self.options().iter().map(|o| o.value).max().unwrap_or(0);
        u32::from(top) * self.question_count() as u32
    }

    /// Map a total onto its severity band. Each band's upper bound is
    /// inclusive, so a score sitting on a threshold belongs to the lower tier.
    fn classify(&self, total: u32) -> Severity {
        let bands = self.bands();
        bands
            .iter()
            .find(|band| total <= band.upper)
            .or_else(|| bands.last())
            .map(|band| band.severity)
            .unwrap_or(Severity::Minimal)
    }

    /// Total and classify an answer set. Entries still at the unanswered
    /// sentinel (or any negative value) count as zero. Never fails;
    /// completeness is checked separately. Off-scale values saturate
    /// rather than overflow.
    fn score(&self, answers: &[i32]) -> ScoreResult {
        let total = answers
            .iter()
            .fold(0u32, |acc, &v| acc.saturating_add(v.max(0) as u32));
        ScoreResult::new(total, self.max_score(), self.classify(total))
    }

    /// Check an answer set against this instrument's shape: the exact
    /// question count and every value on the response scale. The sentinel
    /// is accepted only when `allow_unanswered` is set.
    fn validate_answers(&self, answers: &[i32], allow_unanswered: bool) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if answers.len() != self.question_count() {
            errors.push(ValidationError {
                index: None,
                value: answers.len() as i32,
                message: format!(
                    "{}: expected {} answers, got {}",
                    self.name(),
                    self.question_count(),
                    answers.len(),
                ),
            });
        }

        for (index, &value) in answers.iter().enumerate() {
            if allow_unanswered && value == scoring::UNANSWERED {
                continue;
            }
            if !self.options().iter().any(|o| i32::from(o.value) == value) {
                errors.push(ValidationError {
                    index: Some(index),
                    value,
                    message: format!(
                        "{}: answer {} to question {} is not on the response scale",
                        self.name(),
                        value,
                        index + 1,
                    ),
                });
            }
        }
        errors
    }

    /// Validate a complete answer set, then score it.
    fn score_strict(&self, answers: &[i32]) -> Result<ScoreResult, InstrumentError> {
        if let Some(first) = self.validate_answers(answers, false).into_iter().next() {
            return Err(InstrumentError::InvalidInput(first));
        }
        Ok(self.score(answers))
    }
}

/// The two supported questionnaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentKind {
    Phq9,
    Gad7,
}

impl InstrumentKind {
    pub fn instrument(self) -> &'static dyn Instrument {
        match self {
            InstrumentKind::Phq9 => &instruments::phq9::Phq9,
            InstrumentKind::Gad7 => &instruments::gad7::Gad7,
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.instrument().name())
    }
}

impl FromStr for InstrumentKind {
    type Err = InstrumentError;

    /// Accepts the id, display name, or wire discriminator in any case
    /// ("phq9", "PHQ-9", "Phq9").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "phq9" => Ok(InstrumentKind::Phq9),
            "gad7" => Ok(InstrumentKind::Gad7),
            _ => Err(InstrumentError::UnknownInstrument(s.to_string())),
        }
    }
}

/// Score an answer set for the given questionnaire.
pub fn score(answers: &[i32], kind: InstrumentKind) -> ScoreResult {
    kind.instrument().score(answers)
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<&'static dyn Instrument> {
    vec![
        InstrumentKind::Phq9.instrument(),
        InstrumentKind::Gad7.instrument(),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<&'static dyn Instrument> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
