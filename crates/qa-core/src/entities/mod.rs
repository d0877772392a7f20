//! Domain entities - core business objects

mod tally;
mod target;
mod vote;

pub use tally::VoteTally;
pub use target::Target;
pub use vote::{Vote, VoteStatus, VoteType};
