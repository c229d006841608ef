use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use bat7_core::models::ResultRecord;
use bat7_storage::cache::{CachedRepository, DEFAULT_TTL};
use bat7_storage::error::StorageError;
use bat7_storage::repository::{BoxFuture, ResultRepository};
use uuid::Uuid;

/// Counts loads and returns one record per call, tagged with the call number
/// as the raw score.
#[derive(Default)]
struct CountingRepository {
    loads: Arc<AtomicUsize>,
}

impl ResultRepository for CountingRepository {
    fn load_results(
        &self,
        patient_id: Uuid,
    ) -> BoxFuture<'_, Result<Vec<ResultRecord>, StorageError>> {
        let call = self.loads.fetch_add(1, Ordering::SeqCst) as u32 + 1;
        Box::pin(async move {
            Ok(vec![ResultRecord::new(
                patient_id,
                None,
                call,
                jiff::Timestamp::UNIX_EPOCH,
            )])
        })
    }

    fn list_patients(&self) -> BoxFuture<'_, Result<Vec<Uuid>, StorageError>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

struct FailingRepository {
    loads: Arc<AtomicUsize>,
}

impl ResultRepository for FailingRepository {
    fn load_results(
        &self,
        patient_id: Uuid,
    ) -> BoxFuture<'_, Result<Vec<ResultRecord>, StorageError>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            Err(StorageError::NotFound {
                key: patient_id.to_string(),
            })
        })
    }

    fn list_patients(&self) -> BoxFuture<'_, Result<Vec<Uuid>, StorageError>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

#[test]
fn default_ttl_is_five_minutes() {
    assert_eq!(DEFAULT_TTL, Duration::from_secs(300));
    let cache = CachedRepository::new(CountingRepository::default());
    assert_eq!(cache.ttl(), DEFAULT_TTL);
}

#[tokio::test(start_paused = true)]
async fn second_load_within_ttl_is_served_from_cache() {
    let inner = CountingRepository::default();
    let loads = inner.loads.clone();
    let cache = CachedRepository::new(inner);
    let patient = Uuid::new_v4();

    let first = cache.load_results(patient).await.unwrap();
    tokio::time::advance(Duration::from_secs(299)).await;
    let second = cache.load_results(patient).await.unwrap();

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn expired_entry_is_reloaded() {
    let inner = CountingRepository::default();
    let loads = inner.loads.clone();
    let cache = CachedRepository::new(inner);
    let patient = Uuid::new_v4();

    cache.load_results(patient).await.unwrap();
    tokio::time::advance(Duration::from_secs(301)).await;
    let reloaded = cache.load_results(patient).await.unwrap();

    assert_eq!(loads.load(Ordering::SeqCst), 2);
    assert_eq!(reloaded[0].raw_score, 2);
}

#[tokio::test(start_paused = true)]
async fn expired_entries_for_other_patients_are_swept_on_insert() {
    let cache = CachedRepository::new(CountingRepository::default());
    let stale = Uuid::new_v4();
    let fresh = Uuid::new_v4();

    cache.load_results(stale).await.unwrap();
    assert_eq!(cache.cached_patients().await, 1);

    tokio::time::advance(DEFAULT_TTL + Duration::from_secs(1)).await;
    cache.load_results(fresh).await.unwrap();

    assert_eq!(cache.cached_patients().await, 1);
    assert_eq!(cache.inner().loads.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn patients_are_cached_independently() {
    let inner = CountingRepository::default();
    let loads = inner.loads.clone();
    let cache = CachedRepository::new(inner);

    cache.load_results(Uuid::new_v4()).await.unwrap();
    cache.load_results(Uuid::new_v4()).await.unwrap();
    assert_eq!(loads.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn invalidate_and_clear_force_reload() {
    let inner = CountingRepository::default();
    let loads = inner.loads.clone();
    let cache = CachedRepository::new(inner);
    let patient = Uuid::new_v4();

    cache.load_results(patient).await.unwrap();
    cache.invalidate(patient).await;
    cache.load_results(patient).await.unwrap();
    cache.clear().await;
    cache.load_results(patient).await.unwrap();

    assert_eq!(loads.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn failures_are_not_cached() {
    let loads = Arc::new(AtomicUsize::new(0));
    let cache = CachedRepository::new(FailingRepository {
        loads: loads.clone(),
    });
    let patient = Uuid::new_v4();

    assert!(cache.load_results(patient).await.is_err());
    assert!(cache.load_results(patient).await.is_err());
    assert_eq!(loads.load(Ordering::SeqCst), 2);
}
