use uuid::Uuid;
use tracing::{debug, info, warn};
use shared::models::*;
use crate::error::ApiError;
use crate::store::ElectionStore;

/// CRUD operations over an [`ElectionStore`], with errors already mapped to
/// what the router reports.
pub struct ElectionProcessor;

impl ElectionProcessor {
    pub async fn list_all(store: &dyn ElectionStore) -> Result<Vec<ElectionRecord>, ApiError> {
        let records = store.list_all().await?;
        debug!("Fetched {} election records", records.len());
        Ok(records)
    }

    pub async fn find_by_key(store: &dyn ElectionStore, province_name: &str) -> Result<Option<ElectionRecord>, ApiError> {
        Ok(store.find_by_key(province_name).await?)
    }

    pub async fn find_by_id(store: &dyn ElectionStore, id: Uuid) -> Result<Option<ElectionRecord>, ApiError> {
        Ok(store.find_by_id(id).await?)
    }

    /// Inserts a new record unless `province_name` is already taken.
    ///
    /// The lookup gives the common case a clean rejection; the store's own
    /// uniqueness constraint catches a concurrent create that slips between the
    /// lookup and the insert, and that is reported the same way.
    pub async fn create(store: &dyn ElectionStore, form: &ElectionForm) -> Result<ElectionRecord, ApiError> {
        if Self::find_by_key(store, &form.province_name).await?.is_some() {
            warn!("Rejected duplicate province name: {}", form.province_name);
            return Err(ApiError::DuplicateKey(form.province_name.clone()));
        }

        let record = store.insert(form).await.map_err(|e| {
            let e = ApiError::from(e);
            if let ApiError::DuplicateKey(name) = &e {
                warn!("Store constraint rejected duplicate province name: {}", name);
            }
            e
        })?;

        info!("Created election record {} for {}", record.id, record.province_name);
        Ok(record)
    }

    /// Overwrites the record's fields. Unknown ids are a silent no-op.
    pub async fn update_by_id(store: &dyn ElectionStore, id: Uuid, form: &ElectionForm) -> Result<(), ApiError> {
        store.update_by_id(id, form).await?;
        info!("Updated election record {}", id);
        Ok(())
    }

    pub async fn delete_by_id(store: &dyn ElectionStore, id: Uuid) -> Result<(), ApiError> {
        store.delete_by_id(id).await?;
        info!("Deleted election record {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_create_rejects_existing_key_and_leaves_store_unchanged() {
        let store = MemoryStore::new();
        ElectionProcessor::create(&store, &ElectionForm::new("Jawa Barat", 100, 200)).await.unwrap();
        let before = store.list_all().await.unwrap();

        let err = ElectionProcessor::create(&store, &ElectionForm::new("Jawa Barat", 1, 1)).await.unwrap_err();

        assert!(matches!(err, ApiError::DuplicateKey(ref name) if name == "Jawa Barat"));
        assert_eq!(store.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_concurrent_creates_keep_keys_unique() {
        let store: Arc<dyn ElectionStore> = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let form = ElectionForm::new(format!("Province {}", i % 4), i, i);
                ElectionProcessor::create(store.as_ref(), &form).await
            }));
        }

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(ApiError::DuplicateKey(_)) => {}
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        let records = store.list_all().await.unwrap();
        let names: HashSet<_> = records.iter().map(|r| r.province_name.as_str()).collect();
        assert_eq!(created, 4);
        assert_eq!(records.len(), 4);
        assert_eq!(names.len(), 4);
    }

    #[tokio::test]
    async fn test_update_addresses_by_id() {
        let store = MemoryStore::new();
        let record = ElectionProcessor::create(&store, &ElectionForm::new("Aceh", 1, 2)).await.unwrap();

        ElectionProcessor::update_by_id(&store, record.id, &ElectionForm::new("Papua", 5, 9)).await.unwrap();

        let updated = ElectionProcessor::find_by_id(&store, record.id).await.unwrap().unwrap();
        assert_eq!(updated.id, record.id);
        assert_eq!(updated.province_name, "Papua");
        assert_eq!((updated.candidate_one_votes, updated.candidate_two_votes), (5, 9));
        assert!(ElectionProcessor::find_by_key(&store, "Aceh").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let store = MemoryStore::new();
        let aceh = ElectionProcessor::create(&store, &ElectionForm::new("Aceh", 1, 2)).await.unwrap();
        ElectionProcessor::create(&store, &ElectionForm::new("Bali", 3, 4)).await.unwrap();

        ElectionProcessor::delete_by_id(&store, aceh.id).await.unwrap();
        ElectionProcessor::delete_by_id(&store, aceh.id).await.unwrap();

        let records = ElectionProcessor::list_all(&store).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].province_name, "Bali");
    }
}
