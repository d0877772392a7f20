//! Service context - dependency container for services
//!
//! Holds the repositories, the id generator, and voting settings.

use std::sync::Arc;

use qa_common::VotingConfig;
use qa_core::{ReputationRepository, Snowflake, SnowflakeGenerator, TargetRepository, VoteRepository};
use qa_db::{MemoryStore, PgPool, PgReputationRepository, PgTargetRepository, PgVoteRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent for the in-memory backend
    pool: Option<PgPool>,

    // Repositories
    vote_repo: Arc<dyn VoteRepository>,
    target_repo: Arc<dyn TargetRepository>,
    reputation_repo: Arc<dyn ReputationRepository>,

    snowflake_generator: Arc<SnowflakeGenerator>,
    voting: VotingConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        vote_repo: Arc<dyn VoteRepository>,
        target_repo: Arc<dyn TargetRepository>,
        reputation_repo: Arc<dyn ReputationRepository>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        voting: VotingConfig,
    ) -> Self {
        Self {
            pool,
            vote_repo,
            target_repo,
            reputation_repo,
            snowflake_generator,
            voting,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if the context is database-backed
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    pub fn target_repo(&self) -> &dyn TargetRepository {
        self.target_repo.as_ref()
    }

    pub fn reputation_repo(&self) -> &dyn ReputationRepository {
        self.reputation_repo.as_ref()
    }

    // === Settings ===

    pub fn voting(&self) -> &VotingConfig {
        &self.voting
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .field("voting", &self.voting)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    target_repo: Option<Arc<dyn TargetRepository>>,
    reputation_repo: Option<Arc<dyn ReputationRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    voting: VotingConfig,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use PostgreSQL repositories backed by `pool`
    pub fn postgres(mut self, pool: PgPool) -> Self {
        self.vote_repo = Some(Arc::new(PgVoteRepository::new(pool.clone())));
        self.target_repo = Some(Arc::new(PgTargetRepository::new(pool.clone())));
        self.reputation_repo = Some(Arc::new(PgReputationRepository::new(pool.clone())));
        self.pool = Some(pool);
        self
    }

    /// Use one in-memory store for every repository
    pub fn memory(mut self, store: Arc<MemoryStore>) -> Self {
        self.vote_repo = Some(store.clone());
        self.target_repo = Some(store.clone());
        self.reputation_repo = Some(store);
        self.pool = None;
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn target_repo(mut self, repo: Arc<dyn TargetRepository>) -> Self {
        self.target_repo = Some(repo);
        self
    }

    pub fn reputation_repo(mut self, repo: Arc<dyn ReputationRepository>) -> Self {
        self.reputation_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn voting(mut self, voting: VotingConfig) -> Self {
        self.voting = voting;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let required = |name: &str| ServiceError::validation(format!("{name} is required"));

        Ok(ServiceContext::new(
            self.pool,
            self.vote_repo.ok_or_else(|| required("vote_repo"))?,
            self.target_repo.ok_or_else(|| required("target_repo"))?,
            self.reputation_repo.ok_or_else(|| required("reputation_repo"))?,
            self.snowflake_generator
                .ok_or_else(|| required("snowflake_generator"))?,
            self.voting,
        ))
    }
}
