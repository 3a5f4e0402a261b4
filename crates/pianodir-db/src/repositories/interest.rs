//! PostgreSQL implementation of InterestRepository

use async_trait::async_trait;
use pianodir_core::{DomainError, InterestRecord, InterestRepository, RepoResult};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::mappers::InterestInsert;
use crate::models::InterestModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of InterestRepository
#[derive(Clone)]
pub struct PgInterestRepository {
    pool: PgPool,
}

impl PgInterestRepository {
    /// Create a new PgInterestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterestRepository for PgInterestRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: &str, event_id: &str) -> RepoResult<Option<InterestRecord>> {
        let result = sqlx::query_as::<_, InterestModel>(
            r#"
            SELECT id, user_id, event_id, interested, created_at
            FROM event_interests
            WHERE user_id = $1 AND event_id = $2
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(InterestRecord::from))
    }

    #[instrument(skip(self, record), fields(record_id = %record.id))]
    async fn create(&self, record: &InterestRecord) -> RepoResult<()> {
        let insert = InterestInsert::new(record);

        sqlx::query(
            r#"
            INSERT INTO event_interests (id, user_id, event_id, interested, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(insert.id)
        .bind(insert.user_id)
        .bind(insert.event_id)
        .bind(insert.interested)
        .bind(insert.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::DatabaseError(format!(
                    "interest record already exists for user {} and event {}",
                    record.user_id, record.event_id
                ))
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_interested(&self, id: Uuid, interested: bool) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE event_interests SET interested = $2 WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(interested)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DatabaseError(format!(
                "interest record {id} does not exist"
            )));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_interested(&self, event_id: &str) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM event_interests
            WHERE event_id = $1 AND interested
            "#,
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(map_db_error)
    }
}
