//! Database models - SQLx-compatible structs for PostgreSQL tables

mod target;
mod vote;

pub use target::TargetModel;
pub use vote::VoteModel;
