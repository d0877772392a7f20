//! Request DTOs for API endpoints

use serde::Deserialize;
use validator::{Validate, ValidationError};

use qa_core::{Snowflake, VoteStatus, VoteType};

/// Body of `POST /api/vote`
///
/// Ids may be sent as decimal strings or JSON numbers.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CastVoteRequest {
    #[serde(rename = "votedByID")]
    #[validate(custom(function = "validate_id", message = "votedByID must be a non-zero id"))]
    pub voted_by_id: Snowflake,

    #[serde(rename = "VoteStatus")]
    pub vote_status: VoteStatus,

    #[serde(rename = "type")]
    pub vote_type: VoteType,

    #[serde(rename = "typeID")]
    #[validate(custom(function = "validate_id", message = "typeID must be a non-zero id"))]
    pub type_id: Snowflake,
}

/// Query string of `GET /api/votes/{type}/{typeID}`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TallyQuery {
    #[serde(rename = "votedByID")]
    #[validate(custom(function = "validate_id", message = "votedByID must be a non-zero id"))]
    pub voted_by_id: Option<Snowflake>,
}

fn validate_id(id: &Snowflake) -> Result<(), ValidationError> {
    if id.is_zero() || id.into_inner() < 0 {
        return Err(ValidationError::new("invalid_id"));
    }
    Ok(())
}
