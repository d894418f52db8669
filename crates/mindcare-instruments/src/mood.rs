//! Mood check-ins and the dashboard wellness figure derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::scoring::SeverityBucket;

/// The fixed set of moods a user can log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Stressed,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Stressed,
        Mood::Neutral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Stressed => "Stressed",
            Mood::Neutral => "Neutral",
        }
    }

    /// Contribution to the wellness score.
    pub fn wellness(self) -> u32 {
        match self {
            Mood::Happy => 90,
            Mood::Neutral => 75,
            Mood::Sad => 60,
            Mood::Anxious => 55,
            Mood::Stressed => 45,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InstrumentError::UnknownMood(s.to_string()))
    }
}

const BASE_WELLNESS: u32 = 70;
const MIN_WELLNESS: u32 = 30;
const MAX_WELLNESS: u32 = 100;

/// 1..=5 value for a free-text mood label, matched by keyword.
/// Labels with no recognised keyword sit in the middle.
pub fn mood_value(label: &str) -> u8 {
    let lower = label.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["happy", "great", "excited"]) {
        5
    } else if has(&["good", "calm", "okay"]) {
        4
    } else if has(&["neutral", "fine"]) {
        3
    } else if has(&["sad", "anxious", "stressed"]) {
        2
    } else if has(&["depressed", "overwhelmed"]) {
        1
    } else {
        3
    }
}

/// Wellness score in 30..=100 for the most recent mood, if any.
pub fn wellness_score(mood: Option<Mood>) -> u32 {
    mood.map_or(BASE_WELLNESS, Mood::wellness)
        .clamp(MIN_WELLNESS, MAX_WELLNESS)
}

pub fn wellness_bucket(score: u32) -> SeverityBucket {
    if score >= 80 {
        SeverityBucket::Low
    } else if score >= 65 {
        SeverityBucket::Medium
    } else {
        SeverityBucket::High
    }
}
