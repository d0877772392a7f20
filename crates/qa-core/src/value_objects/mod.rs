//! Value objects - immutable types that represent domain concepts

mod snowflake;
mod transition;

pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use transition::{VoteOutcome, VoteState, VoteTransition};
