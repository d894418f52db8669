use mindcare_instruments::scoring::{Severity, SeverityBucket, UNANSWERED};
use mindcare_instruments::{InstrumentKind, get_instrument, score};

/// Build an answer set of `len` entries summing to `total`.
fn answers_summing_to(total: u32, len: usize) -> Vec<i32> {
    let mut remaining = total as i32;
    (0..len)
        .map(|_| {
            let v = remaining.min(3);
            remaining -= v;
            v
        })
        .collect()
}

#[test]
fn phq9_boundaries() {
    let cases = [
        (0, Severity::Minimal),
        (4, Severity::Minimal),
        (5, Severity::Mild),
        (9, Severity::Mild),
        (10, Severity::Moderate),
        (14, Severity::Moderate),
        (15, Severity::ModeratelySevere),
        (19, Severity::ModeratelySevere),
        (20, Severity::Severe),
        (27, Severity::Severe),
    ];
    for (total, expected) in cases {
        let result = score(&answers_summing_to(total, 9), InstrumentKind::Phq9);
        assert_eq!(result.total, total);
        assert_eq!(result.severity, expected, "PHQ-9 total {total}");
    }
}

#[test]
fn gad7_boundaries() {
    let cases = [
        (4, Severity::Minimal),
        (5, Severity::Mild),
        (9, Severity::Mild),
        (10, Severity::Moderate),
        (14, Severity::Moderate),
        (15, Severity::Severe),
        (21, Severity::Severe),
    ];
    for (total, expected) in cases {
        let result = score(&answers_summing_to(total, 7), InstrumentKind::Gad7);
        assert_eq!(result.total, total);
        assert_eq!(result.severity, expected, "GAD-7 total {total}");
    }
}

#[test]
fn gad7_never_reports_moderately_severe() {
    for total in 0..=21 {
        let result = score(&answers_summing_to(total, 7), InstrumentKind::Gad7);
        assert_ne!(result.severity, Severity::ModeratelySevere);
    }
}

#[test]
fn total_is_sum_of_entries_within_range() {
    let answers = [3, 0, 2, 1, 3, 3, 0, 1, 2];
    let result = score(&answers, InstrumentKind::Phq9);
    assert_eq!(result.total, 15);
    assert_eq!(result.max_score, 27);
    assert!(result.total <= result.max_score);
}

#[test]
fn every_valid_phq9_answer_set_totals_its_sum() {
    // 4^9 answer sets, decoded from a base-4 counter.
    for n in 0u32..4u32.pow(9) {
        let answers: Vec<i32> = (0..9).map(|i| ((n >> (2 * i)) & 3) as i32).collect();
        let sum: i32 = answers.iter().sum();
        let result = score(&answers, InstrumentKind::Phq9);
        assert_eq!(result.total, sum as u32, "{answers:?}");
        assert!(result.total <= 27);
    }
}

#[test]
fn off_scale_values_saturate_instead_of_overflowing() {
    let answers = [i32::MAX, i32::MAX, i32::MAX, 0, 0, 0, 0, 0, 0];
    let result = score(&answers, InstrumentKind::Phq9);
    assert_eq!(result.total, u32::MAX);
    assert_eq!(result.severity, Severity::Severe);
    assert!(result.needs_attention);
}

#[test]
fn unanswered_entries_count_as_zero() {
    let answers = [2, UNANSWERED, 3, UNANSWERED, UNANSWERED, 1, UNANSWERED];
    let result = score(&answers, InstrumentKind::Gad7);
    assert_eq!(result.total, 6);
    assert_eq!(result.severity, Severity::Mild);
}

#[test]
fn all_unanswered_previews_as_minimal_zero() {
    let result = score(&[UNANSWERED; 9], InstrumentKind::Phq9);
    assert_eq!(result.total, 0);
    assert_eq!(result.severity, Severity::Minimal);
}

#[test]
fn bucket_follows_severity() {
    assert_eq!(Severity::Minimal.bucket(), SeverityBucket::Low);
    assert_eq!(Severity::Mild.bucket(), SeverityBucket::Low);
    assert_eq!(Severity::Moderate.bucket(), SeverityBucket::Medium);
    assert_eq!(Severity::ModeratelySevere.bucket(), SeverityBucket::High);
    assert_eq!(Severity::Severe.bucket(), SeverityBucket::High);

    let result = score(&answers_summing_to(12, 9), InstrumentKind::Phq9);
    assert_eq!(result.severity_label(), "Moderate");
    assert_eq!(result.severity_color_class(), "text-stress-medium");
}

#[test]
fn needs_attention_above_mild() {
    assert!(!score(&answers_summing_to(9, 7), InstrumentKind::Gad7).needs_attention);
    assert!(score(&answers_summing_to(10, 7), InstrumentKind::Gad7).needs_attention);
}

#[test]
fn severity_serializes_as_display_label() {
    let json = serde_json::to_string(&Severity::ModeratelySevere).unwrap();
    assert_eq!(json, "\"Moderately Severe\"");
}

#[test]
fn validate_rejects_wrong_length_and_out_of_range() {
    let phq9 = InstrumentKind::Phq9.instrument();

    let errors = phq9.validate_answers(&[0, 1, 2], false);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].index.is_none());

    let errors = phq9.validate_answers(&[0, 1, 2, 3, 4, 0, 0, 0, UNANSWERED], false);
    let indices: Vec<_> = errors.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![Some(4), Some(8)]);

    let errors = phq9.validate_answers(&[0, 1, 2, 3, 0, 0, 0, 0, UNANSWERED], true);
    assert!(errors.is_empty());
}

#[test]
fn score_strict_fails_on_invalid_input() {
    let gad7 = InstrumentKind::Gad7.instrument();
    assert!(gad7.score_strict(&[1, 1, 1, 1, 1, 1, 7]).is_err());
    assert_eq!(gad7.score_strict(&[1, 1, 1, 1, 1, 1, 1]).unwrap().total, 7);
}

#[test]
fn kind_parses_from_many_spellings() {
    assert_eq!("phq9".parse::<InstrumentKind>().unwrap(), InstrumentKind::Phq9);
    assert_eq!("PHQ-9".parse::<InstrumentKind>().unwrap(), InstrumentKind::Phq9);
    assert_eq!("Gad7".parse::<InstrumentKind>().unwrap(), InstrumentKind::Gad7);
    assert!("bdi".parse::<InstrumentKind>().is_err());
}

#[test]
fn registry_lookup() {
    let gad7 = get_instrument("gad7").unwrap();
    assert_eq!(gad7.name(), "GAD-7");
    assert_eq!(gad7.wire_type(), "GAD-7");
    assert_eq!(gad7.question_count(), 7);
    assert_eq!(gad7.max_score(), 21);
    assert_eq!(gad7.options().len(), 4);
    assert!(get_instrument("bdi").is_none());
}

#[test]
fn guidance_tracks_tiers() {
    let phq9 = InstrumentKind::Phq9.instrument();
    assert!(phq9.guidance(4).contains("minimal symptoms"));
    assert!(phq9.guidance(5).contains("mild symptoms"));
    assert!(phq9.guidance(14).contains("moderate symptoms"));
    assert!(phq9.guidance(15).contains("significant symptoms"));

    let gad7 = InstrumentKind::Gad7.instrument();
    assert!(gad7.guidance(21).contains("severe anxiety"));
}
