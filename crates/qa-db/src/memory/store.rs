//! DashMap-backed repositories

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::instrument;

use qa_core::{
    DomainError, RepoResult, ReputationRepository, Snowflake, Target, TargetRepository, Vote,
    VoteQuery, VoteRepository, VoteType,
};

/// (type, target, voter): one vote per key
type VoteKey = (VoteType, Snowflake, Snowflake);

/// Process-local store for votes, targets and reputation
#[derive(Debug, Default)]
pub struct MemoryStore {
    votes: DashMap<VoteKey, Vote>,
    vote_keys: DashMap<Snowflake, VoteKey>,
    targets: DashMap<(VoteType, Snowflake), Target>,
    reputation: DashMap<Snowflake, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user with a starting reputation
    pub fn insert_user(&self, user_id: Snowflake, reputation: i64) {
        self.reputation.insert(user_id, reputation);
    }

    /// Register a question or answer so it can be voted on
    pub fn insert_target(&self, target: Target) {
        self.targets.insert((target.vote_type, target.id), target);
    }

    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }
}

#[async_trait]
impl VoteRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find(
        &self,
        vote_type: VoteType,
        type_id: Snowflake,
        voted_by_id: Snowflake,
    ) -> RepoResult<Option<Vote>> {
        Ok(self
            .votes
            .get(&(vote_type, type_id, voted_by_id))
            .map(|v| v.clone()))
    }

    #[instrument(skip(self, vote), fields(vote_id = %vote.id))]
    async fn create(&self, vote: &Vote) -> RepoResult<()> {
        let key = (vote.vote_type, vote.type_id, vote.voted_by_id);
        match self.votes.entry(key) {
            Entry::Occupied(_) => Err(DomainError::VoteAlreadyExists),
            Entry::Vacant(slot) => {
                self.vote_keys.insert(vote.id, key);
                slot.insert(vote.clone());
                Ok(())
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let Some((_, key)) = self.vote_keys.remove(&id) else {
            return Ok(false);
        };
        Ok(self.votes.remove_if(&key, |_, vote| vote.id == id).is_some())
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &VoteQuery) -> RepoResult<i64> {
        let count = self
            .votes
            .iter()
            .filter(|entry| query.matches(entry.value()))
            .count();
        i64::try_from(count).map_err(|e| DomainError::InternalError(e.to_string()))
    }
}

#[async_trait]
impl TargetRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find(&self, vote_type: VoteType, id: Snowflake) -> RepoResult<Option<Target>> {
        Ok(self.targets.get(&(vote_type, id)).map(|t| *t))
    }
}

#[async_trait]
impl ReputationRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn get(&self, user_id: Snowflake) -> RepoResult<Option<i64>> {
        Ok(self.reputation.get(&user_id).map(|r| *r))
    }

    #[instrument(skip(self))]
    async fn adjust(&self, user_id: Snowflake, delta: i64) -> RepoResult<i64> {
        // The shard lock is held for the read-modify-write
        let mut entry = self
            .reputation
            .get_mut(&user_id)
            .ok_or(DomainError::UserNotFound(user_id))?;
        *entry += delta;
        Ok(*entry)
    }
}
