use bat7_aptitudes::banding::is_weakness;
use bat7_aptitudes::recommendation_for;
use bat7_core::models::AptitudeCode;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::aggregate::PatientStatistics;
use crate::trend::Trend;

pub const IMPROVING_SENTENCE: &str = "Scores show an improving trend across recent \
     evaluations; maintain the current intervention plan.";
pub const DECLINING_SENTENCE: &str = "Scores show a declining trend across recent \
     evaluations; schedule a follow-up review.";
pub const STABLE_SENTENCE: &str =
    "Scores are stable across evaluations; continue periodic monitoring.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    /// `None` for the overall-trend sentence.
    pub aptitude_code: Option<AptitudeCode>,
    pub text: String,
}

/// The fixed sentence for an overall trend. Undetermined trends have none.
pub fn trend_sentence(trend: Trend) -> Option<&'static str> {
    match trend {
        Trend::Improving => Some(IMPROVING_SENTENCE),
        Trend::Declining => Some(DECLINING_SENTENCE),
        Trend::Stable => Some(STABLE_SENTENCE),
        Trend::Undetermined => None,
    }
}

/// One recommendation per aptitude needing development, then the trend
/// sentence.
///
/// An aptitude needs development when it sits in the comparative "areas for
/// development" half or its average percentile is at or below the weakness
/// threshold. Each aptitude appears once: areas for development first, in
/// ranking order, then remaining weaknesses in code order.
pub fn generate_recommendations(stats: &PatientStatistics) -> Vec<Recommendation> {
    let mut flagged: Vec<&AptitudeCode> = stats
        .comparative
        .areas_for_development
        .iter()
        .map(|r| &r.code)
        .collect();

    for (code, summary) in &stats.aptitudes {
        if summary.average_percentile.is_some_and(is_weakness) && !flagged.contains(&code) {
            flagged.push(code);
        }
    }

    let mut recommendations: Vec<Recommendation> = flagged
        .into_iter()
        .map(|code| Recommendation {
            aptitude_code: Some(code.clone()),
            text: recommendation_for(code.as_str()),
        })
        .collect();

    if let Some(sentence) = trend_sentence(stats.overall.trend) {
        recommendations.push(Recommendation {
            aptitude_code: None,
            text: sentence.to_string(),
        });
    }

    recommendations
}
