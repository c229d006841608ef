use std::collections::BTreeMap;

use bat7_core::models::{AptitudeCode, PatientIdentity, ResultRecord};
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use crate::aggregate::{PatientStatistics, aggregate};
use crate::interpret::{
    AptitudeInterpretation, StrengthProfile, assess_levels, interpret_statistics,
};
use crate::recommend::{Recommendation, generate_recommendations};

/// Everything the rendering layer needs for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientReport {
    /// Taken from the first record that carries joined patient fields.
    pub patient: Option<PatientIdentity>,
    pub statistics: PatientStatistics,
    pub interpretations: BTreeMap<AptitudeCode, AptitudeInterpretation>,
    pub strength_profile: StrengthProfile,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: jiff::Timestamp,
}

/// Build a report with an explicit generation time.
pub fn compose_report(records: &[ResultRecord], generated_at: jiff::Timestamp) -> PatientReport {
    let statistics = aggregate(records);
    let interpretations = interpret_statistics(&statistics);
    let strength_profile = assess_levels(&statistics);
    let recommendations = generate_recommendations(&statistics);
    let patient = records.iter().find_map(|r| r.patient.clone());

    info!(
        evaluations = statistics.overall.total_evaluations,
        aptitudes = statistics.aptitudes.len(),
        interpreted = interpretations.len(),
        recommendations = recommendations.len(),
        "patient report composed"
    );

    PatientReport {
        patient,
        statistics,
        interpretations,
        strength_profile,
        recommendations,
        generated_at,
    }
}

/// Build a report stamped with the current time.
pub fn generate_report(records: &[ResultRecord]) -> PatientReport {
    compose_report(records, jiff::Timestamp::now())
}
