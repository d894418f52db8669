use mindcare_instruments::InstrumentKind;
use mindcare_instruments::error::InstrumentError;
use mindcare_instruments::questionnaire::Questionnaire;
use mindcare_instruments::scoring::Severity;

#[test]
fn starts_empty_on_first_question() {
    let q = Questionnaire::new(InstrumentKind::Phq9);
    assert_eq!(q.current_index(), 0);
    assert_eq!(q.answers().len(), 9);
    assert_eq!(q.answers().unanswered(), 9);
    assert!(q.current_question().contains("little interest"));
}

#[test]
fn next_is_refused_until_answered() {
    let mut q = Questionnaire::new(InstrumentKind::Gad7);
    assert!(matches!(q.next(), Err(InstrumentError::Unanswered { index: 0 })));
    q.answer(2).unwrap();
    assert!(q.next().unwrap());
    assert_eq!(q.current_index(), 1);
}

#[test]
fn out_of_scale_answer_is_rejected() {
    let mut q = Questionnaire::new(InstrumentKind::Gad7);
    assert!(matches!(q.answer(4), Err(InstrumentError::InvalidInput(_))));
    assert!(matches!(q.answer(-1), Err(InstrumentError::InvalidInput(_))));
    assert!(q.answers().get(0).is_none());
}

#[test]
fn previous_stops_at_first_question() {
    let mut q = Questionnaire::new(InstrumentKind::Gad7);
    q.previous();
    assert_eq!(q.current_index(), 0);
}

#[test]
fn walk_through_and_finish() {
    let mut q = Questionnaire::new(InstrumentKind::Gad7);
    for value in [3, 2, 2, 1, 1, 0, 3] {
        q.answer(value).unwrap();
        if !q.next().unwrap() {
            break;
        }
    }
    assert!(q.is_last());
    assert!((q.progress_percent() - 100.0).abs() < f64::EPSILON);

    let result = q.finish().unwrap();
    assert_eq!(result.total, 12);
    assert_eq!(result.severity, Severity::Moderate);

    let submission = q.submission("u42").unwrap();
    assert_eq!(submission.kind, "GAD-7");
    assert_eq!(submission.score, 12);
    assert_eq!(submission.user_id, "u42");
}

#[test]
fn finish_fails_while_incomplete_but_preview_works() {
    let mut q = Questionnaire::new(InstrumentKind::Phq9);
    q.answer(3).unwrap();
    q.answer_at(5, 2).unwrap();

    assert_eq!(q.preview().total, 5);
    match q.finish() {
        Err(InstrumentError::Incomplete { unanswered, .. }) => assert_eq!(unanswered, 7),
        other => panic!("expected Incomplete, got {other:?}"),
    }
    assert!(q.submission("u1").is_err());
}

#[test]
fn changing_an_answer_rescores() {
    let mut q = Questionnaire::new(InstrumentKind::Phq9);
    q.answer(3).unwrap();
    assert_eq!(q.preview().total, 3);
    q.answer(1).unwrap();
    assert_eq!(q.preview().total, 1);
}

#[test]
fn answer_at_out_of_range_index() {
    let mut q = Questionnaire::new(InstrumentKind::Gad7);
    assert!(matches!(
        q.answer_at(7, 1),
        Err(InstrumentError::QuestionOutOfRange { index: 7, .. })
    ));
}

#[test]
fn reset_clears_answers() {
    let mut q = Questionnaire::new(InstrumentKind::Gad7);
    q.answer(1).unwrap();
    q.next().unwrap();
    q.answer(2).unwrap();
    q.reset();
    assert_eq!(q.current_index(), 0);
    assert_eq!(q.answers().unanswered(), 7);
    assert_eq!(q.preview().total, 0);
}

#[test]
fn progress_counts_current_question() {
    let mut q = Questionnaire::new(InstrumentKind::Phq9);
    assert!((q.progress_percent() - 100.0 / 9.0).abs() < 1e-9);
    q.answer(0).unwrap();
    q.next().unwrap();
    assert!((q.progress_percent() - 200.0 / 9.0).abs() < 1e-9);
}
