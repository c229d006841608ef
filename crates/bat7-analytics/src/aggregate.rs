use std::collections::BTreeMap;

use bat7_aptitudes::get_aptitude;
use bat7_core::models::{AptitudeCode, ResultRecord};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::composite::{CompositeIndex, compute_composites};
use crate::stats::{mean, mean_percentile, round2};
use crate::trend::{Trend, classify_trend};

/// Per-aptitude breakdown. Recomputed on every call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AptitudeSummary {
    pub code: AptitudeCode,
    /// Catalog name, or the code itself for aptitudes outside the catalog.
    pub name: String,
    pub description: Option<String>,
    pub evaluation_count: usize,
    pub average_raw_score: f64,
    /// `None` when no record carried a percentile.
    pub average_percentile: Option<u8>,
    pub best_raw_score: u32,
    pub worst_raw_score: u32,
    pub trend: Trend,
    pub average_concentration_index: Option<f64>,
    pub average_elapsed_seconds: Option<f64>,
    pub total_errors: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OverallStatistics {
    /// Every record, including those without an aptitude code.
    pub total_evaluations: usize,
    pub average_raw_score: f64,
    pub average_percentile: Option<u8>,
    pub trend: Trend,
    pub aptitudes_evaluated: Vec<AptitudeCode>,
    /// Records counted above but left out of the per-aptitude map.
    pub unassigned_evaluations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedAptitude {
    pub code: AptitudeCode,
    pub average_raw_score: f64,
}

/// Within-patient ranking by average raw score. Relative, not a clinical
/// threshold: someone scoring high everywhere still has "areas".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparativeAnalysis {
    pub strengths: Vec<RankedAptitude>,
    pub areas_for_development: Vec<RankedAptitude>,
}

/// Numeric output of [`aggregate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientStatistics {
    pub overall: OverallStatistics,
    pub aptitudes: BTreeMap<AptitudeCode, AptitudeSummary>,
    pub composites: Vec<CompositeIndex>,
    pub comparative: ComparativeAnalysis,
}

/// Compute statistics over one patient's records.
///
/// Input order does not matter. Records without an aptitude code are left
/// out of the per-aptitude map but still count towards the overall totals,
/// averages and trend. Empty input yields zeroed statistics.
pub fn aggregate(records: &[ResultRecord]) -> PatientStatistics {
    let mut groups: BTreeMap<&AptitudeCode, Vec<&ResultRecord>> = BTreeMap::new();
    let mut unassigned = 0;
    for record in records {
        match &record.aptitude_code {
            Some(code) => groups.entry(code).or_default().push(record),
            None => unassigned += 1,
        }
    }

    let aptitudes: BTreeMap<AptitudeCode, AptitudeSummary> = groups
        .into_iter()
        .map(|(code, group)| (code.clone(), summarize(code, &group)))
        .collect();

    let overall = OverallStatistics {
        total_evaluations: records.len(),
        average_raw_score: mean(records.iter().map(|r| f64::from(r.raw_score)))
            .map(round2)
            .unwrap_or(0.0),
        average_percentile: mean_percentile(records.iter().map(|r| r.percentile)),
        trend: classify_trend(records),
        aptitudes_evaluated: aptitudes.keys().cloned().collect(),
        unassigned_evaluations: unassigned,
    };

    if unassigned > 0 {
        tracing::debug!(
            unassigned,
            total = records.len(),
            "records without aptitude code excluded from grouping"
        );
    }

    PatientStatistics {
        composites: compute_composites(&aptitudes),
        comparative: rank_aptitudes(&aptitudes),
        overall,
        aptitudes,
    }
}

fn summarize(code: &AptitudeCode, group: &[&ResultRecord]) -> AptitudeSummary {
    let aptitude = get_aptitude(code.as_str());
    let raw_scores = group.iter().map(|r| r.raw_score);

    let errors: Vec<u32> = group.iter().filter_map(|r| r.error_count).collect();

    AptitudeSummary {
        code: code.clone(),
        name: aptitude
            .as_ref()
            .map(|a| a.name().to_string())
            .unwrap_or_else(|| code.to_string()),
        description: aptitude.as_ref().map(|a| a.description().to_string()),
        evaluation_count: group.len(),
        average_raw_score: mean(raw_scores.clone().map(f64::from))
            .map(round2)
            .unwrap_or(0.0),
        average_percentile: mean_percentile(group.iter().map(|r| r.percentile)),
        best_raw_score: raw_scores.clone().max().unwrap_or(0),
        worst_raw_score: raw_scores.min().unwrap_or(0),
        trend: classify_trend(group.iter().copied()),
        average_concentration_index: mean(group.iter().filter_map(|r| r.concentration_index))
            .map(round2),
        average_elapsed_seconds: mean(
            group
                .iter()
                .filter_map(|r| r.elapsed_seconds)
                .map(f64::from),
        )
        .map(round2),
        total_errors: (!errors.is_empty())
            .then(|| errors.iter().fold(0u32, |acc, &e| acc.saturating_add(e))),
    }
}

/// Split aptitudes at the midpoint of a descending ranking. With an odd
/// count the extra aptitude goes to strengths (`ceil(n / 2)`).
fn rank_aptitudes(aptitudes: &BTreeMap<AptitudeCode, AptitudeSummary>) -> ComparativeAnalysis {
    let mut ranked: Vec<RankedAptitude> = aptitudes
        .values()
        .map(|s| RankedAptitude {
            code: s.code.clone(),
            average_raw_score: s.average_raw_score,
        })
        .collect();
    // Stable sort: ties keep code order.
    ranked.sort_by(|a, b| b.average_raw_score.total_cmp(&a.average_raw_score));

    let split = ranked.len().div_ceil(2);
    let areas_for_development = ranked.split_off(split);
    ComparativeAnalysis {
        strengths: ranked,
        areas_for_development,
    }
}
