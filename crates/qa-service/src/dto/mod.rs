//! Data transfer objects for API requests and responses
//!
//! Field names follow the public JSON contract (`votedByID`, `typeID`, ...).

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CastVoteRequest, TallyQuery};
pub use responses::{
    ApiResponse, CastVoteData, CastVoteResponse, HealthChecks, HealthResponse, ReadinessResponse,
    ReputationResponse, TallyResponse, VoteDocument,
};
