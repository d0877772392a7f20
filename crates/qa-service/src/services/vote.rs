//! Vote service
//!
//! Casts votes, keeps author reputation in step, and reports tallies.

use qa_common::TallyScope;
use qa_core::{
    DomainError, Snowflake, Target, Vote, VoteQuery, VoteStatus, VoteTally, VoteTransition,
    VoteType,
};
use tracing::{debug, error, info, instrument, warn};

use crate::dto::{CastVoteRequest, CastVoteResponse, ReputationResponse, TallyResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast, flip or withdraw a vote
    ///
    /// Every lookup that can fail with "not found" runs before the first
    /// write. Reputation moves by the transition's net delta in one atomic
    /// adjustment. If the prior vote was removed but its replacement cannot
    /// be stored, only the removed vote's weight is taken back.
    #[instrument(skip(self, request), fields(
        voted_by_id = %request.voted_by_id,
        vote_type = %request.vote_type,
        type_id = %request.type_id,
    ))]
    pub async fn cast_vote(&self, request: CastVoteRequest) -> ServiceResult<CastVoteResponse> {
        let CastVoteRequest {
            voted_by_id,
            vote_status,
            vote_type,
            type_id,
        } = request;

        let target = self.find_target(vote_type, type_id).await?;

        // The author must exist before any vote is touched
        if self
            .ctx
            .reputation_repo()
            .get(target.author_id)
            .await?
            .is_none()
        {
            return Err(DomainError::UserNotFound(target.author_id).into());
        }

        let prior = self
            .ctx
            .vote_repo()
            .find(vote_type, type_id, voted_by_id)
            .await?;

        let transition = VoteTransition::between(prior.as_ref().map(|v| v.status), vote_status);
        debug!(from = ?transition.from, to = ?transition.to, "Vote transition");

        if let Some(prior) = &prior {
            let removed = self.ctx.vote_repo().delete(prior.id).await?;
            if !removed {
                return Err(DomainError::VoteChangedConcurrently(prior.id).into());
            }
        }

        let document = match transition.next_status() {
            Some(status) => {
                let vote = Vote::new(
                    self.ctx.generate_id(),
                    vote_type,
                    type_id,
                    voted_by_id,
                    status,
                );
                if let Err(e) = self.ctx.vote_repo().create(&vote).await {
                    if prior.is_some() {
                        self.release_removed(target.author_id, &transition).await;
                    }
                    return Err(e.into());
                }
                Some(vote)
            }
            None => None,
        };

        let reputation = self
            .ctx
            .reputation_repo()
            .adjust(target.author_id, transition.reputation_delta)
            .await?;

        let tally = self
            .tally(self.result_query(vote_type, type_id, voted_by_id))
            .await?;

        info!(
            vote_id = ?document.as_ref().map(|v| v.id),
            author_id = %target.author_id,
            delta = transition.reputation_delta,
            reputation,
            vote_result = tally.result(),
            outcome = transition.outcome.message(),
            "Vote cast"
        );

        Ok(CastVoteResponse::new(
            transition.outcome,
            document.map(Into::into),
            tally.result(),
        ))
    }

    /// Vote counts across all voters, plus one voter's own status if given
    #[instrument(skip(self))]
    pub async fn get_tally(
        &self,
        vote_type: VoteType,
        type_id: Snowflake,
        voted_by_id: Option<Snowflake>,
    ) -> ServiceResult<TallyResponse> {
        self.find_target(vote_type, type_id).await?;

        let tally = self.tally(VoteQuery::target(vote_type, type_id)).await?;

        let vote_status = match voted_by_id {
            Some(voter) => self
                .ctx
                .vote_repo()
                .find(vote_type, type_id, voter)
                .await?
                .map(|v| v.status),
            None => None,
        };

        Ok(TallyResponse::new(vote_type, type_id, tally, vote_status))
    }

    /// Current reputation of a user
    #[instrument(skip(self))]
    pub async fn get_reputation(&self, user_id: Snowflake) -> ServiceResult<ReputationResponse> {
        let reputation = self
            .ctx
            .reputation_repo()
            .get(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(ReputationResponse::new(user_id, reputation))
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    async fn find_target(&self, vote_type: VoteType, type_id: Snowflake) -> ServiceResult<Target> {
        let target = self
            .ctx
            .target_repo()
            .find(vote_type, type_id)
            .await?
            .ok_or_else(|| DomainError::target_not_found(vote_type, type_id))?;
        Ok(target)
    }

    /// Undo the removed prior vote's reputation after a failed replacement
    async fn release_removed(&self, author_id: Snowflake, transition: &VoteTransition) {
        let delta = -transition.from.weight();
        match self.ctx.reputation_repo().adjust(author_id, delta).await {
            Ok(reputation) => warn!(
                author_id = %author_id,
                delta,
                reputation,
                "Prior vote removed without a replacement"
            ),
            Err(e) => error!(
                author_id = %author_id,
                delta,
                error = %e,
                "Failed to release reputation of a removed vote"
            ),
        }
    }

    /// Filter for the `voteResult` returned after a cast
    fn result_query(
        &self,
        vote_type: VoteType,
        type_id: Snowflake,
        voted_by_id: Snowflake,
    ) -> VoteQuery {
        let query = VoteQuery::target(vote_type, type_id);
        match self.ctx.voting().tally_scope {
            TallyScope::Voter => query.by_voter(voted_by_id),
            TallyScope::Global => query,
        }
    }

    /// Count up and down votes concurrently
    async fn tally(&self, query: VoteQuery) -> ServiceResult<VoteTally> {
        let repo = self.ctx.vote_repo();
        let up = query.with_status(VoteStatus::Upvoted);
        let down = query.with_status(VoteStatus::Downvoted);

        let (upvotes, downvotes) = tokio::try_join!(repo.count(&up), repo.count(&down))?;
        Ok(VoteTally::new(upvotes, downvotes))
    }
}
