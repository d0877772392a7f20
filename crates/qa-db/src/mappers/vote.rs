//! Vote entity <-> model mapper

use qa_core::{DomainError, Snowflake, Target, Vote, VoteType};

use crate::models::{TargetModel, VoteModel};

/// Convert VoteModel to Vote entity
///
/// Fails if a text column holds a value the domain enums do not know.
impl TryFrom<VoteModel> for Vote {
    type Error = DomainError;

    fn try_from(model: VoteModel) -> Result<Self, Self::Error> {
        Ok(Vote {
            id: Snowflake::new(model.id),
            vote_type: model.target_type.parse().map_err(corrupt_row)?,
            type_id: Snowflake::new(model.target_id),
            voted_by_id: Snowflake::new(model.voted_by_id),
            status: model.vote_status.parse().map_err(corrupt_row)?,
            created_at: model.created_at,
        })
    }
}

fn corrupt_row(e: DomainError) -> DomainError {
    DomainError::DatabaseError(format!("invalid vote row: {e}"))
}

/// Build a Target from a question/answer row
pub(crate) fn target_from_model(vote_type: VoteType, model: TargetModel) -> Target {
    Target::new(
        vote_type,
        Snowflake::new(model.id),
        Snowflake::new(model.author_id),
    )
}

/// Vote entity values for database insertion
pub struct VoteInsert<'a> {
    pub id: i64,
    pub target_type: &'static str,
    pub target_id: i64,
    pub voted_by_id: i64,
    pub vote_status: &'static str,
    pub created_at: &'a chrono::DateTime<chrono::Utc>,
}

impl<'a> VoteInsert<'a> {
    pub fn new(vote: &'a Vote) -> Self {
        Self {
            id: vote.id.into_inner(),
            target_type: vote.vote_type.as_str(),
            target_id: vote.type_id.into_inner(),
            voted_by_id: vote.voted_by_id.into_inner(),
            vote_status: vote.status.as_str(),
            created_at: &vote.created_at,
        }
    }
}
