//! PostgreSQL implementation of TargetRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qa_core::{RepoResult, Snowflake, Target, TargetRepository, VoteType};

use crate::mappers::target_from_model;
use crate::models::TargetModel;

use super::error::map_db_error;

/// Looks up questions and answers in their own tables
#[derive(Clone)]
pub struct PgTargetRepository {
    pool: PgPool,
}

impl PgTargetRepository {
    /// Create a new PgTargetRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TargetRepository for PgTargetRepository {
    #[instrument(skip(self))]
    async fn find(&self, vote_type: VoteType, id: Snowflake) -> RepoResult<Option<Target>> {
        let sql = match vote_type {
            VoteType::Question => "SELECT id, author_id FROM questions WHERE id = $1",
            VoteType::Answer => "SELECT id, author_id FROM answers WHERE id = $1",
        };

        let result = sqlx::query_as::<_, TargetModel>(sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(|model| target_from_model(vote_type, model)))
    }
}
