//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qa_core::{
    DomainError, RepoResult, Snowflake, Vote, VoteQuery, VoteRepository, VoteStatus, VoteType,
};

use crate::mappers::VoteInsert;
use crate::models::VoteModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        vote_type: VoteType,
        type_id: Snowflake,
        voted_by_id: Snowflake,
    ) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT id, target_type, target_id, voted_by_id, vote_status, created_at
            FROM votes
            WHERE target_type = $1 AND target_id = $2 AND voted_by_id = $3
            "#,
        )
        .bind(vote_type.as_str())
        .bind(type_id.into_inner())
        .bind(voted_by_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Vote::try_from).transpose()
    }

    #[instrument(skip(self, vote), fields(vote_id = %vote.id))]
    async fn create(&self, vote: &Vote) -> RepoResult<()> {
        let insert = VoteInsert::new(vote);

        sqlx::query(
            r#"
            INSERT INTO votes (id, target_type, target_id, voted_by_id, vote_status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(insert.id)
        .bind(insert.target_type)
        .bind(insert.target_id)
        .bind(insert.voted_by_id)
        .bind(insert.vote_status)
        .bind(insert.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::VoteAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM votes WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &VoteQuery) -> RepoResult<i64> {
        // NULL filters match every row
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM votes
            WHERE target_type = $1
              AND target_id = $2
              AND ($3::TEXT IS NULL OR vote_status = $3)
              AND ($4::BIGINT IS NULL OR voted_by_id = $4)
            "#,
        )
        .bind(query.vote_type.as_str())
        .bind(query.type_id.into_inner())
        .bind(query.status.map(VoteStatus::as_str))
        .bind(query.voted_by_id.map(Snowflake::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
