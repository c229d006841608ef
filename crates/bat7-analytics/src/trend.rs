use bat7_core::models::ResultRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::stats::mean;

/// Number of records in each of the recent and baseline windows.
pub const TREND_WINDOW: usize = 3;

/// Minimum raw-score difference between windows to call a direction.
pub const TREND_THRESHOLD: f64 = 2.0;

/// Direction of change across repeated administrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    /// Fewer than two records.
    Undetermined,
}

/// Classify the trend of a set of records by raw score.
///
/// Records are ordered by `created_at` (input order is not trusted). The
/// recent window is the newest [`TREND_WINDOW`] records and the baseline the
/// oldest [`TREND_WINDOW`]. With fewer than `2 * TREND_WINDOW` records the
/// two windows share records; that overlap is accepted and damps the
/// difference for short histories.
pub fn classify_trend<'a, I>(records: I) -> Trend
where
    I: IntoIterator<Item = &'a ResultRecord>,
{
    let mut ordered: Vec<&ResultRecord> = records.into_iter().collect();
    if ordered.len() < 2 {
        return Trend::Undetermined;
    }
    // Stable sort: same-instant records keep their input order.
    ordered.sort_by_key(|r| r.created_at);

    let window = TREND_WINDOW.min(ordered.len());
    let raw = |rs: &[&ResultRecord]| mean(rs.iter().map(|r| f64::from(r.raw_score)));
    let (Some(baseline), Some(recent)) = (
        raw(&ordered[..window]),
        raw(&ordered[ordered.len() - window..]),
    ) else {
        return Trend::Undetermined;
    };

    let difference = recent - baseline;
    if difference > TREND_THRESHOLD {
        Trend::Improving
    } else if difference < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}
