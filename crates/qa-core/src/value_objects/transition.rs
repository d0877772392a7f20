//! Vote state machine
//!
//! Each (voter, target) pair is in one of three states. Casting a status
//! either moves to that status or, when it repeats the current one, toggles
//! the vote off. Every transition carries the net reputation change for the
//! target's author.

use crate::entities::VoteStatus;

/// State of a single voter's vote on a single target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VoteState {
    #[default]
    NoVote,
    Upvoted,
    Downvoted,
}

impl VoteState {
    /// Status of the stored record in this state, if any
    #[inline]
    pub const fn status(self) -> Option<VoteStatus> {
        match self {
            Self::NoVote => None,
            Self::Upvoted => Some(VoteStatus::Upvoted),
            Self::Downvoted => Some(VoteStatus::Downvoted),
        }
    }

    /// Reputation the author holds from this voter while in this state
    #[inline]
    pub const fn weight(self) -> i64 {
        match self {
            Self::NoVote => 0,
            Self::Upvoted => 1,
            Self::Downvoted => -1,
        }
    }
}

impl From<Option<VoteStatus>> for VoteState {
    fn from(status: Option<VoteStatus>) -> Self {
        match status {
            None => Self::NoVote,
            Some(VoteStatus::Upvoted) => Self::Upvoted,
            Some(VoteStatus::Downvoted) => Self::Downvoted,
        }
    }
}

/// User-visible result of casting a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteOutcome {
    /// First vote on the target
    Voted,
    /// Vote flipped between up and down
    StatusUpdated,
    /// Same status cast again; vote removed
    Withdrawn,
}

impl VoteOutcome {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Voted => "Voted",
            Self::StatusUpdated => "Vote Status Updated",
            Self::Withdrawn => "Vote Withdrawn",
        }
    }

    /// Whether a new vote record exists after this outcome
    #[inline]
    pub const fn creates_record(self) -> bool {
        !matches!(self, Self::Withdrawn)
    }
}

/// One row of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    pub from: VoteState,
    pub to: VoteState,
    pub reputation_delta: i64,
    pub outcome: VoteOutcome,
}

impl VoteTransition {
    /// Look up the transition for a prior vote status and the desired status
    ///
    /// The reputation delta is the weight of the new state minus the weight
    /// of the old one.
    pub const fn between(prior: Option<VoteStatus>, desired: VoteStatus) -> Self {
        use VoteOutcome::{StatusUpdated, Voted, Withdrawn};
        use VoteState::{Downvoted, NoVote, Upvoted};

        let (from, to, outcome) = match (prior, desired) {
            (None, VoteStatus::Upvoted) => (NoVote, Upvoted, Voted),
            (None, VoteStatus::Downvoted) => (NoVote, Downvoted, Voted),
            (Some(VoteStatus::Upvoted), VoteStatus::Upvoted) => (Upvoted, NoVote, Withdrawn),
            (Some(VoteStatus::Upvoted), VoteStatus::Downvoted) => (Upvoted, Downvoted, StatusUpdated),
            (Some(VoteStatus::Downvoted), VoteStatus::Downvoted) => (Downvoted, NoVote, Withdrawn),
            (Some(VoteStatus::Downvoted), VoteStatus::Upvoted) => (Downvoted, Upvoted, StatusUpdated),
        };

        Self {
            from,
            to,
            reputation_delta: to.weight() - from.weight(),
            outcome,
        }
    }

    /// Status of the record to create, `None` when the vote is withdrawn
    #[inline]
    pub const fn next_status(&self) -> Option<VoteStatus> {
        self.to.status()
    }
}
