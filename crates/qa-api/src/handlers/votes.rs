//! Vote handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use qa_service::dto::{ApiResponse, CastVoteRequest, TallyQuery, TallyResponse};
use qa_service::VoteService;
use validator::Validate;

use crate::extractors::{ValidatedJson, VoteTargetPath};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Cast, flip or withdraw a vote
///
/// POST /api/vote
///
/// Responds 201 when a vote record was created and 200 when the vote was
/// withdrawn.
pub async fn cast_vote(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CastVoteRequest>,
) -> ApiResult<Response> {
    let service = VoteService::new(state.service_context());
    let response = service.cast_vote(body).await?;

    if response.outcome.creates_record() {
        Ok(Created(Json(response)).into_response())
    } else {
        Ok(Json(response).into_response())
    }
}

/// Vote counts for a question or answer
///
/// GET /api/votes/:vote_type/:type_id?votedByID=
pub async fn get_tally(
    State(state): State<AppState>,
    Path(path): Path<VoteTargetPath>,
    query: Result<Query<TallyQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<TallyResponse>>> {
    let vote_type = path.vote_type()?;
    let type_id = path.type_id()?;
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;
    query.validate()?;

    let service = VoteService::new(state.service_context());
    let tally = service
        .get_tally(vote_type, type_id, query.voted_by_id)
        .await?;
    Ok(Json(ApiResponse::new(tally)))
}
