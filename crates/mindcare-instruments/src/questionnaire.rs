//! Step-by-step questionnaire state.
//!
//! One question is shown at a time. Answers are recorded into a fixed-size
//! [`AnswerSet`] initialised to the unanswered sentinel; the set never grows,
//! shrinks, or reorders. The running score is available at every step, but
//! only a complete set can be finished and submitted.

use serde::{Deserialize, Serialize};

use mindcare_core::models::assessment::AssessmentSubmission;

use crate::InstrumentKind;
use crate::error::InstrumentError;
use crate::scoring::{ScoreResult, UNANSWERED, ValidationError};

/// Ordered per-question answers, `UNANSWERED` until set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    values: Vec<i32>,
}

impl AnswerSet {
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![UNANSWERED; len],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// The answer at `index`, or `None` while it is unanswered.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.values
            .get(index)
            .copied()
            .filter(|&v| v != UNANSWERED)
            .and_then(|v| u8::try_from(v).ok())
    }

    pub fn unanswered(&self) -> usize {
        self.values.iter().filter(|&&v| v == UNANSWERED).count()
    }

    pub fn is_complete(&self) -> bool {
        self.unanswered() == 0
    }

    fn set(&mut self, index: usize, value: i32) {
        self.values[index] = value;
    }
}

/// A questionnaire in progress.
#[derive(Debug, Clone, Serialize)]
pub struct Questionnaire {
    kind: InstrumentKind,
    answers: AnswerSet,
    current: usize,
}

impl Questionnaire {
    pub fn new(kind: InstrumentKind) -> Self {
        Self {
            kind,
            answers: AnswerSet::new(kind.instrument().question_count()),
            current: 0,
        }
    }

    pub fn kind(&self) -> InstrumentKind {
        self.kind
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &'static str {
        self.kind.instrument().questions()[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.answers.len()
    }

    pub fn progress_percent(&self) -> f64 {
        (self.current + 1) as f64 / self.answers.len() as f64 * 100.0
    }

    /// Record an answer for the current question.
    pub fn answer(&mut self, value: i32) -> Result<(), InstrumentError> {
        self.answer_at(self.current, value)
    }

    /// Record an answer for any question.
    pub fn answer_at(&mut self, index: usize, value: i32) -> Result<(), InstrumentError> {
        let instrument = self.kind.instrument();
        if index >= self.answers.len() {
            return Err(InstrumentError::QuestionOutOfRange {
                instrument: instrument.name().to_string(),
                index,
            });
        }
        if !instrument.options().iter().any(|o| i32::from(o.value) == value) {
            return Err(InstrumentError::InvalidInput(ValidationError {
                index: Some(index),
                value,
                message: format!(
                    "{}: answer {} to question {} is not on the response scale",
                    instrument.name(),
                    value,
                    index + 1,
                ),
            }));
        }
        self.answers.set(index, value);
        Ok(())
    }

    /// Move to the next question. Refused while the current one is
    /// unanswered. Returns `false` when already on the last question.
    pub fn next(&mut self) -> Result<bool, InstrumentError> {
        if self.answers.get(self.current).is_none() {
            return Err(InstrumentError::Unanswered {
                index: self.current,
            });
        }
        if self.is_last() {
            return Ok(false);
        }
        self.current += 1;
        Ok(true)
    }

    /// Move back one question. No-op on the first.
    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Running score over whatever has been answered so far.
    pub fn preview(&self) -> ScoreResult {
        self.kind.instrument().score(self.answers.values())
    }

    /// Final score. Fails while any question is unanswered.
    pub fn finish(&self) -> Result<ScoreResult, InstrumentError> {
        let unanswered = self.answers.unanswered();
        if unanswered > 0 {
            return Err(InstrumentError::Incomplete {
                instrument: self.kind.instrument().name().to_string(),
                unanswered,
            });
        }
        Ok(self.preview())
    }

    /// Backend payload for a finished questionnaire.
    pub fn submission(&self, user_id: &str) -> Result<AssessmentSubmission, InstrumentError> {
        let result = self.finish()?;
        Ok(AssessmentSubmission {
            user_id: user_id.to_string(),
            kind: self.kind.instrument().wire_type().to_string(),
            score: result.total,
        })
    }

    /// Clear every answer and return to the first question.
    pub fn reset(&mut self) {
        self.answers = AnswerSet::new(self.answers.len());
        self.current = 0;
    }
}
