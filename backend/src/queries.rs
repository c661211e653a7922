use sqlx::PgPool;
use uuid::Uuid;
use tracing::debug;
use shared::models::*;
use crate::store::{ElectionStore, StoreError};

const RECORD_COLUMNS: &str =
    "id, province_name, candidate_one_votes, candidate_two_votes, created_at";

/// PostgreSQL-backed store. Uniqueness of `province_name` is enforced by the
/// `unique_province_name` constraint, not by the caller.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_db_error(e: sqlx::Error, province_name: &str) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            debug!("Unique constraint {:?} rejected {}", db.constraint(), province_name);
            StoreError::Duplicate(province_name.to_string())
        }
        _ => StoreError::Unavailable(e.to_string()),
    }
}

#[rocket::async_trait]
impl ElectionStore for PgStore {
    async fn list_all(&self) -> Result<Vec<ElectionRecord>, StoreError> {
        sqlx::query_as::<_, ElectionRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM election_records ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn find_by_key(&self, province_name: &str) -> Result<Option<ElectionRecord>, StoreError> {
        sqlx::query_as::<_, ElectionRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM election_records WHERE province_name = $1"
        ))
        .bind(province_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ElectionRecord>, StoreError> {
        sqlx::query_as::<_, ElectionRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM election_records WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn insert(&self, form: &ElectionForm) -> Result<ElectionRecord, StoreError> {
        sqlx::query_as::<_, ElectionRecord>(&format!(
            "INSERT INTO election_records (province_name, candidate_one_votes, candidate_two_votes)
             VALUES ($1, $2, $3)
             RETURNING {RECORD_COLUMNS}"
        ))
        .bind(&form.province_name)
        .bind(form.candidate_one_votes)
        .bind(form.candidate_two_votes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, &form.province_name))
    }

    async fn update_by_id(&self, id: Uuid, form: &ElectionForm) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE election_records
             SET province_name = $2, candidate_one_votes = $3, candidate_two_votes = $4
             WHERE id = $1"
        )
        .bind(id)
        .bind(&form.province_name)
        .bind(form.candidate_one_votes)
        .bind(form.candidate_two_votes)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, &form.province_name))?;

        debug!("Updated {} row(s) for record {}", result.rows_affected(), id);
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM election_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        debug!("Deleted {} row(s) for record {}", result.rows_affected(), id);
        Ok(())
    }
}
