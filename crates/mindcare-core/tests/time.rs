use mindcare_core::time::parse_timestamp;

#[test]
fn rfc3339_with_zulu_offset() {
    let ts = parse_timestamp("2025-03-01T09:30:00Z").unwrap();
    assert_eq!(ts.to_string(), "2025-03-01T09:30:00Z");
}

#[test]
fn rfc3339_with_numeric_offset() {
    let ts = parse_timestamp("2025-03-01T11:30:00+02:00").unwrap();
    assert_eq!(ts.to_string(), "2025-03-01T09:30:00Z");
}

#[test]
fn civil_datetime_is_read_as_utc() {
    let ts = parse_timestamp("2025-03-01T09:30:00").unwrap();
    assert_eq!(ts.to_string(), "2025-03-01T09:30:00Z");
}

#[test]
fn civil_datetime_with_seven_fraction_digits() {
    let ts = parse_timestamp("2025-03-01T09:30:00.1234567").unwrap();
    assert_eq!(ts.as_second(), parse_timestamp("2025-03-01T09:30:00Z").unwrap().as_second());
}

#[test]
fn garbage_is_rejected() {
    assert!(parse_timestamp("yesterday").is_err());
    assert!(parse_timestamp("").is_err());
}
