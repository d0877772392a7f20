//! Vote entity - one user's up/down vote on a question or answer

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Kind of content a vote targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Question,
    Answer,
}

impl VoteType {
    /// Storage/wire representation
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question" => Ok(Self::Question),
            "answer" => Ok(Self::Answer),
            other => Err(DomainError::ValidationError(format!(
                "unknown vote type: {other}"
            ))),
        }
    }
}

/// Direction of a persisted vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteStatus {
    Upvoted,
    Downvoted,
}

impl VoteStatus {
    /// Storage/wire representation
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upvoted => "upvoted",
            Self::Downvoted => "downvoted",
        }
    }
}

impl fmt::Display for VoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvoted" => Ok(Self::Upvoted),
            "downvoted" => Ok(Self::Downvoted),
            other => Err(DomainError::ValidationError(format!(
                "unknown vote status: {other}"
            ))),
        }
    }
}

/// Vote entity
///
/// At most one vote exists per (`vote_type`, `type_id`, `voted_by_id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: Snowflake,
    pub vote_type: VoteType,
    pub type_id: Snowflake,
    pub voted_by_id: Snowflake,
    pub status: VoteStatus,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Create a new Vote
    pub fn new(
        id: Snowflake,
        vote_type: VoteType,
        type_id: Snowflake,
        voted_by_id: Snowflake,
        status: VoteStatus,
    ) -> Self {
        Self {
            id,
            vote_type,
            type_id,
            voted_by_id,
            status,
            created_at: Utc::now(),
        }
    }

    /// Check whether this vote belongs to the given (target, voter) pair
    pub fn is_for(&self, vote_type: VoteType, type_id: Snowflake, voted_by_id: Snowflake) -> bool {
        self.vote_type == vote_type && self.type_id == type_id && self.voted_by_id == voted_by_id
    }
}
