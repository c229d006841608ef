use std::path::{Path, PathBuf};

use bat7_core::models::ResultRecord;
use bat7_core::paths;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::StorageError;
use crate::repository::{BoxFuture, ResultRepository};

/// Results stored as one JSON array per patient under
/// `<root>/results/<patient_id>.json`.
#[derive(Debug, Clone)]
pub struct FileRepository {
    root: PathBuf,
}

impl FileRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn results_path(&self, patient_id: Uuid) -> PathBuf {
        self.root.join(paths::results(patient_id))
    }

    /// Write a patient's results, replacing any existing document.
    pub async fn save_results(
        &self,
        patient_id: Uuid,
        records: &[ResultRecord],
    ) -> Result<(), StorageError> {
        let path = self.results_path(patient_id);
        let dir = self.root.join(paths::RESULTS_DIR);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| StorageError::io(&dir, e))?;

        let body = serde_json::to_vec_pretty(records)?;

        // Write to a temp file then rename so readers never see a partial document.
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &body)
            .await
            .map_err(|e| StorageError::io(&tmp_path, e))?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| StorageError::io(&path, e))?;

        info!(%patient_id, count = records.len(), "results saved");
        Ok(())
    }

    async fn read_results(&self, patient_id: Uuid) -> Result<Vec<ResultRecord>, StorageError> {
        let path = self.results_path(patient_id);
        let body = match tokio::fs::read(&path).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound {
                    key: paths::results(patient_id),
                });
            }
            Err(e) => return Err(StorageError::io(&path, e)),
        };

        let mut records: Vec<ResultRecord> = serde_json::from_slice(&body)?;
        let before = records.len();
        records.retain(|r| r.patient_id == patient_id);
        if records.len() != before {
            warn!(
                %patient_id,
                dropped = before - records.len(),
                "ignoring records that belong to another patient"
            );
        }

        debug!(%patient_id, count = records.len(), "results loaded");
        Ok(records)
    }

    async fn read_patient_ids(&self) -> Result<Vec<Uuid>, StorageError> {
        let dir = self.root.join(paths::RESULTS_DIR);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(&dir, e)),
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::io(&dir, e))?
        {
            let name = entry.file_name();
            if let Some(id) = name.to_str().and_then(paths::patient_id_from_file_name) {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }
}

impl ResultRepository for FileRepository {
    fn load_results(
        &self,
        patient_id: Uuid,
    ) -> BoxFuture<'_, Result<Vec<ResultRecord>, StorageError>> {
        Box::pin(self.read_results(patient_id))
    }

    fn list_patients(&self) -> BoxFuture<'_, Result<Vec<Uuid>, StorageError>> {
        Box::pin(self.read_patient_ids())
    }
}
