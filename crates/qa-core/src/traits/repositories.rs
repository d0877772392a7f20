//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or in-memory).

use async_trait::async_trait;

use crate::entities::{Target, Vote, VoteStatus, VoteType};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Vote Repository
// ============================================================================

/// Equality filter over vote records
///
/// `vote_type` and `type_id` are always applied; `status` and `voted_by_id`
/// narrow the match when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteQuery {
    pub vote_type: VoteType,
    pub type_id: Snowflake,
    pub status: Option<VoteStatus>,
    pub voted_by_id: Option<Snowflake>,
}

impl VoteQuery {
    /// All votes on a target
    pub fn target(vote_type: VoteType, type_id: Snowflake) -> Self {
        Self {
            vote_type,
            type_id,
            status: None,
            voted_by_id: None,
        }
    }

    pub fn with_status(mut self, status: VoteStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn by_voter(mut self, voted_by_id: Snowflake) -> Self {
        self.voted_by_id = Some(voted_by_id);
        self
    }

    /// Check a vote against this filter
    pub fn matches(&self, vote: &Vote) -> bool {
        vote.vote_type == self.vote_type
            && vote.type_id == self.type_id
            && self.status.is_none_or(|s| vote.status == s)
            && self.voted_by_id.is_none_or(|v| vote.voted_by_id == v)
    }
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find the vote a user cast on a target
    async fn find(
        &self,
        vote_type: VoteType,
        type_id: Snowflake,
        voted_by_id: Snowflake,
    ) -> RepoResult<Option<Vote>>;

    /// Insert a vote
    ///
    /// Fails with `DomainError::VoteAlreadyExists` if the voter already has a
    /// vote on the target.
    async fn create(&self, vote: &Vote) -> RepoResult<()>;

    /// Delete a vote by ID, returning whether a row was removed
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;

    /// Count votes matching the filter
    async fn count(&self, query: &VoteQuery) -> RepoResult<i64>;
}

// ============================================================================
// Target Repository
// ============================================================================

#[async_trait]
pub trait TargetRepository: Send + Sync {
    /// Find a question or answer by ID
    async fn find(&self, vote_type: VoteType, id: Snowflake) -> RepoResult<Option<Target>>;
}

// ============================================================================
// Reputation Repository
// ============================================================================

#[async_trait]
pub trait ReputationRepository: Send + Sync {
    /// Current reputation of a user, `None` if the user does not exist
    async fn get(&self, user_id: Snowflake) -> RepoResult<Option<i64>>;

    /// Atomically add `delta` to a user's reputation and return the new value
    ///
    /// Fails with `DomainError::UserNotFound` if the user does not exist.
    async fn adjust(&self, user_id: Snowflake, delta: i64) -> RepoResult<i64>;
}
