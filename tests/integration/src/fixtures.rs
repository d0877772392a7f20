//! Test fixtures and data generators

use qa_core::{Snowflake, Target, VoteType};
use qa_db::MemoryStore;
use serde::{Deserialize, Serialize};

pub const AUTHOR_ID: i64 = 1_000;
pub const VOTER_ID: i64 = 2_000;
pub const OTHER_VOTER_ID: i64 = 2_001;
pub const QUESTION_ID: i64 = 50_000;
pub const ANSWER_ID: i64 = 60_000;

/// Seed one author with a question and an answer, plus two voters
pub fn seed(store: &MemoryStore) {
    for user in [AUTHOR_ID, VOTER_ID, OTHER_VOTER_ID] {
        store.insert_user(Snowflake::new(user), 0);
    }
    store.insert_target(Target::new(
        VoteType::Question,
        Snowflake::new(QUESTION_ID),
        Snowflake::new(AUTHOR_ID),
    ));
    store.insert_target(Target::new(
        VoteType::Answer,
        Snowflake::new(ANSWER_ID),
        Snowflake::new(AUTHOR_ID),
    ));
}

/// Body of `POST /api/vote`
#[derive(Debug, Clone, Serialize)]
pub struct VoteRequest {
    #[serde(rename = "votedByID")]
    pub voted_by_id: String,
    #[serde(rename = "VoteStatus")]
    pub vote_status: &'static str,
    #[serde(rename = "type")]
    pub vote_type: &'static str,
    #[serde(rename = "typeID")]
    pub type_id: String,
}

impl VoteRequest {
    pub fn question(voter: i64, status: &'static str) -> Self {
        Self {
            voted_by_id: voter.to_string(),
            vote_status: status,
            vote_type: "question",
            type_id: QUESTION_ID.to_string(),
        }
    }

    pub fn answer(voter: i64, status: &'static str) -> Self {
        Self {
            vote_type: "answer",
            type_id: ANSWER_ID.to_string(),
            ..Self::question(voter, status)
        }
    }
}

/// Response of `POST /api/vote`
#[derive(Debug, Deserialize)]
pub struct CastVoteBody {
    pub data: CastVoteData,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteData {
    pub document: Option<VoteDocument>,
    pub vote_result: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub vote_type: String,
    #[serde(rename = "typeID")]
    pub type_id: String,
    pub vote_status: String,
    #[serde(rename = "votedByID")]
    pub voted_by_id: String,
    pub created_at: String,
}

/// `{ "data": T }` envelope
#[derive(Debug, Deserialize)]
pub struct DataBody<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyBody {
    #[serde(rename = "type")]
    pub vote_type: String,
    #[serde(rename = "typeID")]
    pub type_id: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub vote_result: i64,
    pub vote_status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReputationBody {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub reputation: i64,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
    pub details: Option<serde_json::Value>,
}
