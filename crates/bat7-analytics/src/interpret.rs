use std::collections::BTreeMap;

use bat7_aptitudes::banding::{CatalogLevel, PerformanceBand, band_four_way, band_two_way};
use bat7_aptitudes::get_aptitude;
use bat7_core::models::AptitudeCode;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::aggregate::PatientStatistics;

/// Catalog text for one aptitude at its four-way band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AptitudeInterpretation {
    pub code: AptitudeCode,
    pub name: String,
    pub description: String,
    pub characteristics: Vec<String>,
    pub level: PerformanceBand,
    pub percentile: u8,
}

/// Catalog text for one aptitude at its two-way level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LevelAssessment {
    pub code: AptitudeCode,
    pub name: String,
    pub level: CatalogLevel,
    pub percentile: u8,
    pub characteristics: Vec<String>,
}

/// Two-way split used by the strengths/weaknesses catalog lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrengthProfile {
    pub strengths: Vec<LevelAssessment>,
    pub weaknesses: Vec<LevelAssessment>,
}

/// Interpret one aptitude using the four-way bands. `None` when the code
/// has no catalog entry; callers skip it rather than fail the report.
pub fn interpret_aptitude(code: &AptitudeCode, percentile: u8) -> Option<AptitudeInterpretation> {
    let aptitude = get_aptitude(code.as_str())?;
    let band = band_four_way(percentile);
    Some(AptitudeInterpretation {
        code: code.clone(),
        name: aptitude.name().to_string(),
        description: aptitude.description().to_string(),
        characteristics: aptitude
            .characteristics(band.catalog_level())
            .iter()
            .map(ToString::to_string)
            .collect(),
        level: band,
        percentile,
    })
}

/// Interpret every aptitude that has an average percentile and a catalog
/// entry. Anything else is left out of the map.
pub fn interpret_statistics(
    stats: &PatientStatistics,
) -> BTreeMap<AptitudeCode, AptitudeInterpretation> {
    let mut interpretations = BTreeMap::new();
    for (code, summary) in &stats.aptitudes {
        let Some(percentile) = summary.average_percentile else {
            continue;
        };
        match interpret_aptitude(code, percentile) {
            Some(interpretation) => {
                interpretations.insert(code.clone(), interpretation);
            }
            None => tracing::debug!(code = %code, "no catalog entry, skipping interpretation"),
        }
    }
    interpretations
}

/// Classify each aptitude with a percentile using the two-way rule.
pub fn assess_levels(stats: &PatientStatistics) -> StrengthProfile {
    let mut profile = StrengthProfile::default();
    for (code, summary) in &stats.aptitudes {
        let Some(percentile) = summary.average_percentile else {
            continue;
        };
        let Some(aptitude) = get_aptitude(code.as_str()) else {
            continue;
        };
        let level = band_two_way(percentile);
        let assessment = LevelAssessment {
            code: code.clone(),
            name: aptitude.name().to_string(),
            level,
            percentile,
            characteristics: aptitude
                .characteristics(level)
                .iter()
                .map(ToString::to_string)
                .collect(),
        };
        match level {
            CatalogLevel::High => profile.strengths.push(assessment),
            CatalogLevel::Low => profile.weaknesses.push(assessment),
        }
    }
    profile
}
