//! Entity to DTO mappers

use qa_core::{Snowflake, Vote, VoteStatus, VoteTally, VoteType};

use super::responses::{ReputationResponse, TallyResponse, VoteDocument};

impl From<&Vote> for VoteDocument {
    fn from(vote: &Vote) -> Self {
        Self {
            id: vote.id.to_string(),
            vote_type: vote.vote_type,
            type_id: vote.type_id.to_string(),
            vote_status: vote.status,
            voted_by_id: vote.voted_by_id.to_string(),
            created_at: vote.created_at,
        }
    }
}

impl From<Vote> for VoteDocument {
    fn from(vote: Vote) -> Self {
        Self::from(&vote)
    }
}

impl TallyResponse {
    pub fn new(
        vote_type: VoteType,
        type_id: Snowflake,
        tally: VoteTally,
        vote_status: Option<VoteStatus>,
    ) -> Self {
        Self {
            vote_type,
            type_id: type_id.to_string(),
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            vote_result: tally.result(),
            vote_status,
        }
    }
}

impl ReputationResponse {
    pub fn new(user_id: Snowflake, reputation: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            reputation,
        }
    }
}
