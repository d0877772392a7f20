//! # qa-core
//!
//! Domain layer for question/answer voting: entities, value objects, the vote
//! transition table, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Target, Vote, VoteStatus, VoteTally, VoteType};
pub use error::DomainError;
pub use traits::{
    RepoResult, ReputationRepository, TargetRepository, VoteQuery, VoteRepository,
};
pub use value_objects::{
    Snowflake, SnowflakeGenerator, SnowflakeParseError, VoteOutcome, VoteState, VoteTransition,
};
