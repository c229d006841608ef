//! Percentile banding.
//!
//! Two schemes coexist and are NOT interchangeable: per-aptitude display uses
//! the four-way bands, the strengths/weaknesses lookup uses the two-way cut
//! at 70. Unifying them changes which aptitudes get flagged.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Four-way band used for per-aptitude display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PerformanceBand {
    /// PC 75 and above.
    High,
    /// PC 50–74.
    MediumHigh,
    /// PC 25–49.
    MediumLow,
    /// Below PC 25.
    Low,
}

impl PerformanceBand {
    /// Collapse onto the catalog's two text variants.
    pub fn catalog_level(self) -> CatalogLevel {
        match self {
            PerformanceBand::High | PerformanceBand::MediumHigh => CatalogLevel::High,
            PerformanceBand::MediumLow | PerformanceBand::Low => CatalogLevel::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceBand::High => "High",
            PerformanceBand::MediumHigh => "Medium-High",
            PerformanceBand::MediumLow => "Medium-Low",
            PerformanceBand::Low => "Low",
        }
    }
}

/// Two-way level; also the two text variants the catalog carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CatalogLevel {
    High,
    Low,
}

impl CatalogLevel {
    pub fn label(self) -> &'static str {
        match self {
            CatalogLevel::High => "High",
            CatalogLevel::Low => "Low",
        }
    }
}

/// Lower bound of the two-way "High" level.
pub const TWO_WAY_HIGH_THRESHOLD: u8 = 70;

/// Percentile at or below which an aptitude counts as a weakness.
pub const WEAKNESS_THRESHOLD: u8 = 25;

pub fn band_four_way(percentile: u8) -> PerformanceBand {
    match percentile {
        75.. => PerformanceBand::High,
        50..=74 => PerformanceBand::MediumHigh,
        25..=49 => PerformanceBand::MediumLow,
        _ => PerformanceBand::Low,
    }
}

pub fn band_two_way(percentile: u8) -> CatalogLevel {
    if percentile >= TWO_WAY_HIGH_THRESHOLD {
        CatalogLevel::High
    } else {
        CatalogLevel::Low
    }
}

pub fn is_weakness(percentile: u8) -> bool {
    percentile <= WEAKNESS_THRESHOLD
}
