use std::collections::HashMap;
use std::time::Duration;

use bat7_core::models::ResultRecord;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::error::StorageError;
use crate::repository::{BoxFuture, ResultRepository};

/// Default lifetime of a cached lookup.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry {
    records: Vec<ResultRecord>,
    fetched_at: Instant,
}

/// Per-patient TTL cache in front of another repository.
///
/// Only successful loads are cached. Patient listings always go to the
/// inner repository.
pub struct CachedRepository<R> {
    inner: R,
    ttl: Duration,
    entries: Mutex<HashMap<Uuid, CacheEntry>>,
}

impl<R: ResultRepository> CachedRepository<R> {
    pub fn new(inner: R) -> Self {
        Self::with_ttl(inner, DEFAULT_TTL)
    }

    pub fn with_ttl(inner: R, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Drop the cached entry for one patient, e.g. after new results arrive.
    pub async fn invalidate(&self, patient_id: Uuid) {
        self.entries.lock().await.remove(&patient_id);
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    /// Number of patients currently held, expired entries included until the
    /// next insert sweeps them.
    pub async fn cached_patients(&self) -> usize {
        self.entries.lock().await.len()
    }

    async fn cached_load(&self, patient_id: Uuid) -> Result<Vec<ResultRecord>, StorageError> {
        {
            let mut entries = self.entries.lock().await;
            match entries.get(&patient_id) {
                Some(entry) if entry.fetched_at.elapsed() < self.ttl => {
                    debug!(%patient_id, "results cache hit");
                    return Ok(entry.records.clone());
                }
                Some(_) => {
                    debug!(%patient_id, "results cache entry expired");
                    entries.remove(&patient_id);
                }
                None => {}
            }
        }

        // Lock is not held across the inner load; concurrent misses for the
        // same patient may both fetch, and the later one wins.
        let records = self.inner.load_results(patient_id).await?;
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.fetched_at.elapsed() < self.ttl);
        if entries.len() < before {
            debug!(evicted = before - entries.len(), "expired results cache entries dropped");
        }
        entries.insert(
            patient_id,
            CacheEntry {
                records: records.clone(),
                fetched_at: Instant::now(),
            },
        );
        drop(entries);
        debug!(%patient_id, count = records.len(), "results cached");
        Ok(records)
    }
}

impl<R: ResultRepository> ResultRepository for CachedRepository<R> {
    fn load_results(
        &self,
        patient_id: Uuid,
    ) -> BoxFuture<'_, Result<Vec<ResultRecord>, StorageError>> {
        Box::pin(self.cached_load(patient_id))
    }

    fn list_patients(&self) -> BoxFuture<'_, Result<Vec<Uuid>, StorageError>> {
        self.inner.list_patients()
    }
}
