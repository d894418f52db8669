use crate::Instrument;
use crate::scoring::{Severity, SeverityBand};

/// PHQ-9: Patient Health Questionnaire, nine items.
/// Depression screening. Each item 0–3, total 0–27.
pub struct Phq9;

static QUESTIONS: [&str; 9] = [
    "How often have you had little interest or pleasure in doing things?",
    "How often have you felt down, depressed, or hopeless?",
    "How often have you had trouble falling or staying asleep, or sleeping too much?",
    "How often have you felt tired or had little energy?",
    "How often have you had a poor appetite or been overeating?",
    "How often have you felt bad about yourself, or that you are a failure?",
    "How often have you had trouble concentrating on things?",
    "How often have you been moving or speaking slowly, or feeling fidgety/restless?",
    "How often have you had thoughts that you would be better off dead, or of hurting yourself?",
];

static BANDS: [SeverityBand; 5] = [
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
        upper: 19,
        severity: Severity::ModeratelySevere,
    },
    SeverityBand {
        upper: 27,
        severity: Severity::Severe,
    },
];

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn wire_type(&self) -> &str {
        "PHQ-9"
    }

    fn description(&self) -> &str {
        "Patient Health Questionnaire - 9 items"
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
                "Your responses suggest minimal symptoms. Continue practicing self-care and check in with yourself regularly."
            }
            5..=9 => {
                "Your responses suggest mild symptoms. Consider exploring our self-help resources or talking to someone you trust."
            }
            10..=14 => {
                "Your responses suggest moderate symptoms. We recommend connecting with a counsellor to discuss support options."
            }
            _ => {
                "Your responses suggest significant symptoms. Please consider reaching out to a mental health professional for support."
            }
        }
    }
}
