//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in qa-core.

mod error;
mod reputation;
mod target;
mod vote;

pub use reputation::PgReputationRepository;
pub use target::PgTargetRepository;
pub use vote::PgVoteRepository;
