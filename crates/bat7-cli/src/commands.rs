use std::path::Path;

use bat7_analytics::{PatientReport, generate_report};
use bat7_aptitudes::all_aptitudes;
use bat7_aptitudes::validation::validate_records;
use bat7_core::models::ResultRecord;
use bat7_storage::cache::CachedRepository;
use bat7_storage::files::FileRepository;
use bat7_storage::repository::ResultRepository;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Bat7Config;

/// Catalog listing entry, as printed by `bat7 aptitudes`.
#[derive(Debug, Clone, Serialize)]
pub struct AptitudeEntry {
    pub code: String,
    pub name: String,
    pub description: String,
    pub high_characteristics: Vec<String>,
    pub low_characteristics: Vec<String>,
    pub recommendation: String,
}

pub fn build_repository(config: &Bat7Config) -> CachedRepository<FileRepository> {
    CachedRepository::with_ttl(FileRepository::new(&config.data_dir), config.cache_ttl())
}

/// Build one report per requested patient. Repeated ids are served from
/// the lookup cache.
pub async fn report_patients<R: ResultRepository>(
    repo: &R,
    patient_ids: &[Uuid],
) -> eyre::Result<Vec<PatientReport>> {
    let mut reports = Vec::with_capacity(patient_ids.len());
    for &patient_id in patient_ids {
        let records = repo.load_results(patient_id).await?;
        info!(%patient_id, count = records.len(), "building patient report");
        reports.push(analyze(&records));
    }
    Ok(reports)
}

/// Build a report from a JSON file holding an array of result records.
pub fn analyze_file(path: &Path) -> eyre::Result<PatientReport> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    let records: Vec<ResultRecord> = serde_json::from_str(&contents)?;
    Ok(analyze(&records))
}

fn analyze(records: &[ResultRecord]) -> PatientReport {
    for finding in validate_records(records) {
        warn!(
            record_id = %finding.record_id,
            field = ?finding.field,
            "{}",
            finding.message
        );
    }
    generate_report(records)
}

pub async fn list_patients<R: ResultRepository>(repo: &R) -> eyre::Result<Vec<Uuid>> {
    Ok(repo.list_patients().await?)
}

pub fn catalog() -> Vec<AptitudeEntry> {
    all_aptitudes()
        .iter()
        .map(|a| AptitudeEntry {
            code: a.code().to_string(),
            name: a.name().to_string(),
            description: a.description().to_string(),
            high_characteristics: a
                .high_characteristics()
                .iter()
                .map(ToString::to_string)
                .collect(),
            low_characteristics: a
                .low_characteristics()
                .iter()
                .map(ToString::to_string)
                .collect(),
            recommendation: a.recommendation().to_string(),
        })
        .collect()
}
