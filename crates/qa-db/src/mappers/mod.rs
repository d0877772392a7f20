//! Entity to model mappers
//!
//! - `TryFrom<Model> for Entity`: convert database rows to domain objects
//! - `*Insert` structs: prepare entity data for database operations

mod vote;

pub(crate) use vote::target_from_model;
pub use vote::VoteInsert;
