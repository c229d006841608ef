//! bat7-aptitudes
//!
//! The BAT-7 aptitude catalog. Pure data, no I/O. Defines each aptitude's
//! code, name, description and the canned text used when interpreting high
//! and low performance, plus percentile banding and record validation.

pub mod aptitudes;
pub mod banding;
pub mod error;
pub mod validation;

use banding::CatalogLevel;
use error::AptitudeError;

/// Fallback used when an aptitude code has no recommendation in the catalog.
pub const GENERIC_RECOMMENDATION: &str = "Review this aptitude with the evaluator and plan \
     targeted practice before the next administration.";

/// Trait implemented by each aptitude in the battery.
pub trait Aptitude: Send + Sync {
    /// Short code stored on result rows (e.g., "V", "CON").
    fn code(&self) -> &str;

    /// Human-readable name (e.g., "Verbal Aptitude").
    fn name(&self) -> &str;

    /// What the subtest measures.
    fn description(&self) -> &str;

    /// Characteristics of people performing in the upper band.
    fn high_characteristics(&self) -> &[&'static str];

    /// Characteristics of people performing in the lower band.
    fn low_characteristics(&self) -> &[&'static str];

    /// Development recommendation emitted when this aptitude is a weakness.
    fn recommendation(&self) -> &str;

    /// Whether the subtest produces a concentration index.
    fn is_attention_type(&self) -> bool {
        false
    }

    /// The catalog characteristics for a level. The catalog only carries
    /// two variants, so callers using finer bands map onto these first.
    fn characteristics(&self, level: CatalogLevel) -> &[&'static str] {
        match level {
            CatalogLevel::High => self.high_characteristics(),
            CatalogLevel::Low => self.low_characteristics(),
        }
    }
}

/// Return all registered aptitudes, in battery administration order.
pub fn all_aptitudes() -> Vec<Box<dyn Aptitude>> {
    vec![
        Box::new(aptitudes::verbal::Verbal),
        Box::new(aptitudes::spatial::Spatial),
        Box::new(aptitudes::attention::Attention),
        Box::new(aptitudes::concentration::Concentration),
        Box::new(aptitudes::reasoning::Reasoning),
        Box::new(aptitudes::numerical::Numerical),
        Box::new(aptitudes::mechanical::Mechanical),
        Box::new(aptitudes::spelling::Spelling),
    ]
}

/// Look up an aptitude by code. Matching ignores case and surrounding
/// whitespace, the same normalization `AptitudeCode` applies.
pub fn get_aptitude(code: &str) -> Option<Box<dyn Aptitude>> {
    let code = code.trim();
    all_aptitudes()
        .into_iter()
        .find(|a| a.code().eq_ignore_ascii_case(code))
}

/// Like [`get_aptitude`], for callers that treat a missing entry as an error.
pub fn require_aptitude(code: &str) -> Result<Box<dyn Aptitude>, AptitudeError> {
    get_aptitude(code).ok_or_else(|| AptitudeError::UnknownAptitude(code.to_string()))
}

/// The recommendation for a code, or [`GENERIC_RECOMMENDATION`] when the
/// code is not in the catalog.
pub fn recommendation_for(code: &str) -> String {
    get_aptitude(code)
        .map(|a| a.recommendation().to_string())
        .unwrap_or_else(|| GENERIC_RECOMMENDATION.to_string())
}
