//! Vote target - a question or answer and the user who wrote it

use crate::entities::VoteType;
use crate::value_objects::Snowflake;

/// Content that can receive votes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub vote_type: VoteType,
    pub id: Snowflake,
    /// Receives reputation changes for votes on this content
    pub author_id: Snowflake,
}

impl Target {
    pub fn new(vote_type: VoteType, id: Snowflake, author_id: Snowflake) -> Self {
        Self {
            vote_type,
            id,
            author_id,
        }
    }

    /// Check if the given user wrote this content
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}
