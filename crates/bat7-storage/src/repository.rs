use std::future::Future;
use std::pin::Pin;

use bat7_core::models::ResultRecord;
use uuid::Uuid;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Source of result records, one patient at a time.
pub trait ResultRepository: Send + Sync {
    /// All records for a patient, in storage order.
    fn load_results(
        &self,
        patient_id: Uuid,
    ) -> BoxFuture<'_, Result<Vec<ResultRecord>, StorageError>>;

    /// Patients that have at least one stored result document.
    fn list_patients(&self) -> BoxFuture<'_, Result<Vec<Uuid>, StorageError>>;
}
