use mindcare_instruments::mood::{Mood, mood_value, wellness_bucket, wellness_score};
use mindcare_instruments::scoring::SeverityBucket;

#[test]
fn mood_values_by_keyword() {
    assert_eq!(mood_value("Happy"), 5);
    assert_eq!(mood_value("feeling GREAT today"), 5);
    assert_eq!(mood_value("calm"), 4);
    assert_eq!(mood_value("Neutral"), 3);
    assert_eq!(mood_value("Stressed"), 2);
    assert_eq!(mood_value("Anxious"), 2);
    assert_eq!(mood_value("overwhelmed"), 1);
    assert_eq!(mood_value("hungry"), 3);
}

#[test]
fn wellness_from_latest_mood() {
    assert_eq!(wellness_score(Some(Mood::Happy)), 90);
    assert_eq!(wellness_score(Some(Mood::Stressed)), 45);
    assert_eq!(wellness_score(None), 70);
}

#[test]
fn wellness_buckets() {
    assert_eq!(wellness_bucket(90), SeverityBucket::Low);
    assert_eq!(wellness_bucket(80), SeverityBucket::Low);
    assert_eq!(wellness_bucket(75), SeverityBucket::Medium);
    assert_eq!(wellness_bucket(65), SeverityBucket::Medium);
    assert_eq!(wellness_bucket(60), SeverityBucket::High);
}

#[test]
fn mood_parses_case_insensitively() {
    assert_eq!("anxious".parse::<Mood>().unwrap(), Mood::Anxious);
    assert_eq!(" Neutral ".parse::<Mood>().unwrap(), Mood::Neutral);
    assert!("ecstatic".parse::<Mood>().is_err());
}
