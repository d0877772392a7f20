//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub id: i64,
    pub target_type: String,
    pub target_id: i64,
    pub voted_by_id: i64,
    pub vote_status: String,
    pub created_at: DateTime<Utc>,
}
