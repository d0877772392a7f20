//! PostgreSQL implementation of ReputationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qa_core::{DomainError, RepoResult, ReputationRepository, Snowflake};

use super::error::map_db_error;

/// Reputation stored on the users table
#[derive(Clone)]
pub struct PgReputationRepository {
    pool: PgPool,
}

impl PgReputationRepository {
    /// Create a new PgReputationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReputationRepository for PgReputationRepository {
    #[instrument(skip(self))]
    async fn get(&self, user_id: Snowflake) -> RepoResult<Option<i64>> {
        sqlx::query_scalar::<_, i64>("SELECT reputation FROM users WHERE id = $1")
            .bind(user_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn adjust(&self, user_id: Snowflake, delta: i64) -> RepoResult<i64> {
        // Single statement so concurrent votes cannot lose updates
        let reputation = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE users
            SET reputation = reputation + $2
            WHERE id = $1
            RETURNING reputation
            "#,
        )
        .bind(user_id.into_inner())
        .bind(delta)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        reputation.ok_or(DomainError::UserNotFound(user_id))
    }
}
