use bat7_core::models::ResultRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::get_aptitude;

/// Defines the valid range for a metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const PERCENTILE: ScoreRange = ScoreRange {
        min: 0.0,
        max: 100.0,
    };

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Which record field a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecordField {
    AptitudeCode,
    Percentile,
    CorrectCount,
    ConcentrationIndex,
}

/// A data-quality finding on a single record. Findings never cause the
/// record to be dropped; they are reported alongside the analysis.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub record_id: String,
    pub field: RecordField,
    pub message: String,
}

/// Check one record for out-of-range or inconsistent values.
pub fn validate_record(record: &ResultRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut push = |field: RecordField, message: String| {
        errors.push(ValidationError {
            record_id: record.id.to_string(),
            field,
            message,
        });
    };

    if record.aptitude_code.is_none() {
        push(
            RecordField::AptitudeCode,
            "record has no aptitude code; it is excluded from per-aptitude grouping".to_string(),
        );
    }

    if let Some(pc) = record.percentile
        && !ScoreRange::PERCENTILE.contains(f64::from(pc))
    {
        push(
            RecordField::Percentile,
            format!(
                "percentile {pc} is outside range [{}, {}]",
                ScoreRange::PERCENTILE.min,
                ScoreRange::PERCENTILE.max,
            ),
        );
    }

    if record.answered_total().is_some()
        && let Some(correct) = record.correct_count
        && correct != record.raw_score
    {
        push(
            RecordField::CorrectCount,
            format!(
                "correct count {correct} does not match raw score {}",
                record.raw_score
            ),
        );
    }

    if record.concentration_index.is_some()
        && let Some(code) = &record.aptitude_code
        && let Some(aptitude) = get_aptitude(code.as_str())
        && !aptitude.is_attention_type()
    {
        push(
            RecordField::ConcentrationIndex,
            format!("{} does not produce a concentration index", aptitude.name()),
        );
    }

    errors
}

/// Validate a batch, preserving input order.
pub fn validate_records(records: &[ResultRecord]) -> Vec<ValidationError> {
    records.iter().flat_map(validate_record).collect()
}
