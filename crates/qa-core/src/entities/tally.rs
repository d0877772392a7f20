//! Aggregated vote counts for a target

/// Upvote and downvote totals for a target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl VoteTally {
    pub fn new(upvotes: i64, downvotes: i64) -> Self {
        Self { upvotes, downvotes }
    }

    /// Net score: upvotes minus downvotes
    #[inline]
    pub fn result(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}
