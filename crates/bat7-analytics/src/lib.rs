//! bat7-analytics
//!
//! Patient statistics and interpretation over BAT-7 result records.
//!
//! Everything here is a pure function of its input: no I/O, no caching
//! between calls, safe to call concurrently on independent inputs. Caching
//! belongs to the data-access layer (`bat7-storage`).

pub mod aggregate;
pub mod composite;
pub mod interpret;
pub mod recommend;
pub mod report;
pub mod stats;
pub mod trend;

pub use aggregate::{AptitudeSummary, ComparativeAnalysis, PatientStatistics, aggregate};
pub use report::{PatientReport, compose_report, generate_report};
pub use trend::Trend;
