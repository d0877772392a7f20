//! User handlers

use axum::{
    extract::{Path, State},
    Json,
};
use qa_service::dto::{ApiResponse, ReputationResponse};
use qa_service::VoteService;

use crate::extractors::UserIdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a user's reputation
///
/// GET /api/users/:user_id/reputation
pub async fn get_reputation(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<ApiResponse<ReputationResponse>>> {
    let user_id = path.user_id()?;

    let service = VoteService::new(state.service_context());
    let reputation = service.get_reputation(user_id).await?;
    Ok(Json(ApiResponse::new(reputation)))
}
