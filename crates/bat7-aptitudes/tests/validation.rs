use bat7_aptitudes::validation::{RecordField, validate_record, validate_records};
use bat7_core::models::{AptitudeCode, ResultRecord};
use uuid::Uuid;

fn record(code: Option<&str>, raw: u32) -> ResultRecord {
    ResultRecord::new(
        Uuid::new_v4(),
        code.map(|c| AptitudeCode::new(c).unwrap()),
        raw,
        "2025-01-10T09:00:00Z".parse::<jiff::Timestamp>().unwrap(),
    )
}

#[test]
fn clean_record_has_no_findings() {
    let mut r = record(Some("V"), 20);
    r.percentile = Some(70);
    r.correct_count = Some(20);
    r.incorrect_count = Some(5);
    r.unanswered_count = Some(5);
    assert!(validate_record(&r).is_empty());
}

#[test]
fn missing_code_is_reported() {
    let errors = validate_record(&record(None, 12));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, RecordField::AptitudeCode);
}

#[test]
fn percentile_above_100_is_reported() {
    let mut r = record(Some("N"), 12);
    r.percentile = Some(140);
    let errors = validate_record(&r);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, RecordField::Percentile);
    assert!(errors[0].message.contains("140"));
}

#[test]
fn correct_count_must_match_raw_score() {
    let mut r = record(Some("R"), 15);
    r.correct_count = Some(14);
    r.incorrect_count = Some(6);
    r.unanswered_count = Some(2);
    let errors = validate_record(&r);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, RecordField::CorrectCount);
}

#[test]
fn partial_breakdown_is_not_checked() {
    let mut r = record(Some("R"), 15);
    r.correct_count = Some(14);
    assert!(validate_record(&r).is_empty());
}

#[test]
fn concentration_index_only_on_attention_subtests() {
    let mut attention = record(Some("A"), 40);
    attention.concentration_index = Some(87.5);
    assert!(validate_record(&attention).is_empty());

    let mut verbal = record(Some("V"), 20);
    verbal.concentration_index = Some(50.0);
    let errors = validate_record(&verbal);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, RecordField::ConcentrationIndex);
}

#[test]
fn unknown_code_with_concentration_is_not_flagged() {
    let mut r = record(Some("ZZ"), 3);
    r.concentration_index = Some(10.0);
    assert!(validate_record(&r).is_empty());
}

#[test]
fn batch_validation_keeps_input_order() {
    let first = record(None, 1);
    let mut second = record(Some("E"), 2);
    second.percentile = Some(101);
    let errors = validate_records(&[first.clone(), second.clone()]);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].record_id, first.id.to_string());
    assert_eq!(errors[1].record_id, second.id.to_string());
}

#[test]
fn overflowing_breakdown_is_skipped_without_panicking() {
    let mut r = record(Some("R"), 10);
    r.correct_count = Some(10);
    r.incorrect_count = Some(u32::MAX);
    r.unanswered_count = Some(1);
    assert_eq!(r.answered_total(), None);
    assert!(validate_record(&r).is_empty());
}
