#![allow(dead_code)]

use bat7_core::models::{AptitudeCode, ResultRecord};
use uuid::Uuid;

/// 2025-01-01T00:00:00Z
const BASE_SECOND: i64 = 1_735_689_600;

pub fn day(n: i64) -> jiff::Timestamp {
    jiff::Timestamp::from_second(BASE_SECOND + n * 86_400).unwrap()
}

pub fn code(c: &str) -> AptitudeCode {
    AptitudeCode::new(c).unwrap()
}

pub fn record(c: &str, raw: u32, percentile: Option<u8>, on_day: i64) -> ResultRecord {
    let mut r = ResultRecord::new(Uuid::nil(), Some(code(c)), raw, day(on_day));
    r.percentile = percentile;
    r
}

pub fn unassigned(raw: u32, percentile: Option<u8>, on_day: i64) -> ResultRecord {
    let mut r = ResultRecord::new(Uuid::nil(), None, raw, day(on_day));
    r.percentile = percentile;
    r
}
