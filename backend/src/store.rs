use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;
use tracing::error;
use shared::models::*;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Province name already exists: {0}")]
    Duplicate(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence seam for election records.
///
/// Implementations must reject any write that would leave two records with the
/// same `province_name` by returning [`StoreError::Duplicate`]. Update and delete
/// on an unknown id succeed without touching anything.
#[rocket::async_trait]
pub trait ElectionStore: Send + Sync {
    /// All records in insertion order.
    async fn list_all(&self) -> Result<Vec<ElectionRecord>, StoreError>;
    async fn find_by_key(&self, province_name: &str) -> Result<Option<ElectionRecord>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ElectionRecord>, StoreError>;
    async fn insert(&self, form: &ElectionForm) -> Result<ElectionRecord, StoreError>;
    async fn update_by_id(&self, id: Uuid, form: &ElectionForm) -> Result<(), StoreError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError>;
}

/// In-process store. Records are kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ElectionRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<ElectionRecord>>, StoreError> {
        self.records.lock().map_err(|e| {
            error!("Failed to acquire record store lock: {}", e);
            StoreError::Unavailable("record store lock poisoned".into())
        })
    }
}

#[rocket::async_trait]
impl ElectionStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<ElectionRecord>, StoreError> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_key(&self, province_name: &str) -> Result<Option<ElectionRecord>, StoreError> {
        Ok(self.lock()?.iter().find(|r| r.province_name == province_name).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ElectionRecord>, StoreError> {
        Ok(self.lock()?.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, form: &ElectionForm) -> Result<ElectionRecord, StoreError> {
        let mut records = self.lock()?;
        if records.iter().any(|r| r.province_name == form.province_name) {
            return Err(StoreError::Duplicate(form.province_name.clone()));
        }

        let record = ElectionRecord::new(form);
        records.push(record.clone());
        Ok(record)
    }

    async fn update_by_id(&self, id: Uuid, form: &ElectionForm) -> Result<(), StoreError> {
        let mut records = self.lock()?;
        if records.iter().any(|r| r.id != id && r.province_name == form.province_name) {
            return Err(StoreError::Duplicate(form.province_name.clone()));
        }

        if let Some(record) = records.iter_mut().find(|r| r.id == id) {
            record.apply(form);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        self.lock()?.retain(|r| r.id != id);
        Ok(())
    }
}
