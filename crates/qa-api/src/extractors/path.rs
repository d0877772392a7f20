//! Path parameter extractors
//!
//! Raw path segments are captured as strings and parsed on demand so a bad
//! id or type yields a JSON error instead of Axum's plain-text rejection.

use qa_core::{Snowflake, VoteType};
use serde::Deserialize;

use crate::response::ApiError;

/// `/votes/:vote_type/:type_id`
#[derive(Debug, Deserialize)]
pub struct VoteTargetPath {
    pub vote_type: String,
    pub type_id: String,
}

impl VoteTargetPath {
    /// Parse vote_type as `question` or `answer`
    pub fn vote_type(&self) -> Result<VoteType, ApiError> {
        self.vote_type
            .parse()
            .map_err(|_| ApiError::invalid_path("type must be 'question' or 'answer'"))
    }

    /// Parse type_id as Snowflake
    pub fn type_id(&self) -> Result<Snowflake, ApiError> {
        self.type_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid typeID format"))
    }
}

/// `/users/:user_id/...`
#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid userID format"))
    }
}
