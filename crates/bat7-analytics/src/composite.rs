use std::collections::BTreeMap;

use bat7_core::models::AptitudeCode;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::aggregate::AptitudeSummary;
use crate::stats::mean_percentile;

/// Composite indices built from several aptitudes' average percentiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompositeKind {
    /// General ability.
    G,
    /// Fluid intelligence.
    Gf,
    /// Crystallized intelligence.
    Gc,
}

impl CompositeKind {
    pub const ALL: [CompositeKind; 3] = [CompositeKind::G, CompositeKind::Gf, CompositeKind::Gc];

    pub fn name(self) -> &'static str {
        match self {
            CompositeKind::G => "General Ability (g)",
            CompositeKind::Gf => "Fluid Intelligence (Gf)",
            CompositeKind::Gc => "Crystallized Intelligence (Gc)",
        }
    }

    pub fn components(self) -> &'static [&'static str] {
        match self {
            CompositeKind::G => &["V", "E", "R", "N"],
            CompositeKind::Gf => &["R", "E", "N"],
            CompositeKind::Gc => &["V", "O"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositeIndex {
    pub kind: CompositeKind,
    pub name: String,
    /// Components that contributed a percentile.
    pub components: Vec<AptitudeCode>,
    /// Components the index expects but the patient has no percentile for.
    pub missing_components: Vec<String>,
    pub percentile: u8,
}

/// Compute every composite for which at least one component has an
/// average percentile. Partial composites are kept and list what is missing.
pub fn compute_composites(
    aptitudes: &BTreeMap<AptitudeCode, AptitudeSummary>,
) -> Vec<CompositeIndex> {
    CompositeKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let mut components = Vec::new();
            let mut missing_components = Vec::new();
            let mut percentiles = Vec::new();
            for &code in kind.components() {
                match aptitudes
                    .iter()
                    .find(|(c, _)| c.as_str() == code)
                    .and_then(|(c, s)| s.average_percentile.map(|p| (c, p)))
                {
                    Some((c, p)) => {
                        components.push(c.clone());
                        percentiles.push(Some(p));
                    }
                    None => missing_components.push(code.to_string()),
                }
            }
            let percentile = mean_percentile(percentiles)?;
            Some(CompositeIndex {
                kind,
                name: kind.name().to_string(),
                components,
                missing_components,
                percentile,
            })
        })
        .collect()
}
