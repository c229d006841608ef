use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;
use ts_rs::TS;
use uuid::Uuid;

use super::aptitude_code::AptitudeCode;
use super::patient::PatientIdentity;

/// One scored administration of one aptitude test for one patient.
///
/// Every metric other than the raw score may be missing upstream, so they
/// are all `Option`s: a missing percentile is not a percentile of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    /// `None` for malformed rows. Blank strings deserialize to `None`.
    #[serde(default, deserialize_with = "blank_code_as_none")]
    #[ts(as = "Option<AptitudeCode>")]
    pub aptitude_code: Option<AptitudeCode>,
    /// PD (puntaje directo): number of correct responses.
    pub raw_score: u32,
    /// PC (percentil): absent when the norm tables did not cover the
    /// patient's demographic bracket.
    #[serde(default)]
    pub percentile: Option<u8>,
    #[serde(default)]
    pub error_count: Option<u32>,
    #[serde(default)]
    pub elapsed_seconds: Option<u32>,
    /// Only populated for attention-type aptitudes.
    #[serde(default)]
    pub concentration_index: Option<f64>,
    #[serde(default)]
    pub correct_count: Option<u32>,
    #[serde(default)]
    pub incorrect_count: Option<u32>,
    #[serde(default)]
    pub unanswered_count: Option<u32>,
    pub created_at: jiff::Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<PatientIdentity>,
}

impl ResultRecord {
    /// A record with only the required fields set; handy for callers that
    /// fill in the optional metrics afterwards.
    pub fn new(
        patient_id: Uuid,
        aptitude_code: Option<AptitudeCode>,
        raw_score: u32,
        created_at: jiff::Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id,
            aptitude_code,
            raw_score,
            percentile: None,
            error_count: None,
            elapsed_seconds: None,
            concentration_index: None,
            correct_count: None,
            incorrect_count: None,
            unanswered_count: None,
            created_at,
            patient: None,
        }
    }

    /// Total responses when the full breakdown is present. `None` if any
    /// count is missing or the sum does not fit in a `u32`.
    pub fn answered_total(&self) -> Option<u32> {
        self.correct_count?
            .checked_add(self.incorrect_count?)?
            .checked_add(self.unanswered_count?)
    }
}

fn blank_code_as_none<'de, D>(deserializer: D) -> Result<Option<AptitudeCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(s) if !s.trim().is_empty() => match AptitudeCode::new(&s) {
            Ok(code) => Ok(Some(code)),
            Err(e) => {
                warn!(code = %s, error = %e, "treating unparseable aptitude code as missing");
                Ok(None)
            }
        },
        _ => Ok(None),
    }
}
