use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("{instrument} is incomplete: {unanswered} question(s) unanswered")]
    Incomplete {
        instrument: String,
        unanswered: usize,
    },

    #[error("question {index} is out of range for {instrument}")]
    QuestionOutOfRange { instrument: String, index: usize },

    #[error("question {index} must be answered before moving on")]
    Unanswered { index: usize },

    #[error("unknown mood: {0}")]
    UnknownMood(String),
}
