//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::VoteType;
use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Question not found: {0}")]
    QuestionNotFound(Snowflake),

    #[error("Answer not found: {0}")]
    AnswerNotFound(Snowflake),

    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Vote already exists for this voter and target")]
    VoteAlreadyExists,

    #[error("Vote {0} was changed by a concurrent request")]
    VoteChangedConcurrently(Snowflake),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Not-found error for a vote target of the given kind
    pub fn target_not_found(vote_type: VoteType, id: Snowflake) -> Self {
        match vote_type {
            VoteType::Question => Self::QuestionNotFound(id),
            VoteType::Answer => Self::AnswerNotFound(id),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::QuestionNotFound(_) => "UNKNOWN_QUESTION",
            Self::AnswerNotFound(_) => "UNKNOWN_ANSWER",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::VoteAlreadyExists => "VOTE_ALREADY_EXISTS",
            Self::VoteChangedConcurrently(_) => "VOTE_CHANGED_CONCURRENTLY",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::QuestionNotFound(_) | Self::AnswerNotFound(_) | Self::UserNotFound(_) => 404,
            Self::ValidationError(_) => 400,
            Self::VoteAlreadyExists | Self::VoteChangedConcurrently(_) => 409,
            Self::DatabaseError(_) | Self::InternalError(_) => 500,
        }
    }
}
