//! Response DTOs for API endpoints
//!
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use qa_core::{VoteOutcome, VoteStatus, VoteType};

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Vote Responses
// ============================================================================

/// A stored vote as returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub vote_type: VoteType,
    #[serde(rename = "typeID")]
    pub type_id: String,
    pub vote_status: VoteStatus,
    #[serde(rename = "votedByID")]
    pub voted_by_id: String,
    pub created_at: DateTime<Utc>,
}

/// Payload of a cast vote
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteData {
    /// The created vote, `null` when the vote was withdrawn
    pub document: Option<VoteDocument>,
    pub vote_result: i64,
}

/// Response of `POST /api/vote`
#[derive(Debug, Clone, Serialize)]
pub struct CastVoteResponse {
    pub data: CastVoteData,
    pub message: &'static str,
    #[serde(skip)]
    pub outcome: VoteOutcome,
}

impl CastVoteResponse {
    pub fn new(outcome: VoteOutcome, document: Option<VoteDocument>, vote_result: i64) -> Self {
        Self {
            data: CastVoteData {
                document,
                vote_result,
            },
            message: outcome.message(),
            outcome,
        }
    }
}

/// Vote counts for a target
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyResponse {
    #[serde(rename = "type")]
    pub vote_type: VoteType,
    #[serde(rename = "typeID")]
    pub type_id: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub vote_result: i64,
    /// The requesting voter's current vote, if one was asked for and exists
    pub vote_status: Option<VoteStatus>,
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReputationResponse {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub reputation: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
