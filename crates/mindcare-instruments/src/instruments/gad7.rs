use crate::Instrument;
use crate::scoring::{Severity, SeverityBand};

/// GAD-7: Generalized Anxiety Disorder, seven items.
/// Anxiety screening. Each item 0–3, total 0–21. Four tiers only; there is
/// no "Moderately Severe" band.
pub struct Gad7;

static QUESTIONS: [&str; 7] = [
    "How often have you felt nervous, anxious, or on edge?",
    "How often have you been unable to stop or control worrying?",
    "How often have you worried too much about different things?",
    "How often have you had trouble relaxing?",
    "How often have you been so restless that it's hard to sit still?",
    "How often have you become easily annoyed or irritable?",
    "How often have you felt afraid as if something awful might happen?",
];

static BANDS: [SeverityBand; 4] = [
    SeverityBand {
        upper: 4,
        severity: Severity::Minimal,
    },
    SeverityBand {
        upper: 9,
        severity: Severity::Mild,
    },
    SeverityBand {
        upper: 14,
        severity: Severity::Moderate,
    },
    SeverityBand {
        upper: 21,
        severity: Severity::Severe,
    },
];

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn wire_type(&self) -> &str {
        "GAD-7"
    }

    fn description(&self) -> &str {
        "Generalized Anxiety Disorder - 7 items"
    }

    fn questions(&self) -> &[&'static str] {
        &QUESTIONS
    }

    fn bands(&self) -> &[SeverityBand] {
        &BANDS
    }

    fn guidance(&self, total: u32) -> &'static str {
        match total {
            0..=4 => {
                "Your responses suggest minimal anxiety. Continue practicing self-care and check in with yourself regularly."
            }
            5..=9 => {
                "Your responses suggest mild anxiety. Consider exploring our self-help resources or relaxation techniques."
            }
            10..=14 => {
                "Your responses suggest moderate anxiety. We recommend connecting with a counsellor to discuss support options."
            }
            _ => {
                "Your responses suggest severe anxiety. Please consider reaching out to a mental health professional for support."
            }
        }
    }
}
