//! API Integration Tests
//!
//! Each test spawns the full HTTP stack on an ephemeral port backed by a
//! seeded in-memory store; no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, test_config, TestServer,
};
use qa_common::TallyScope;
use reqwest::StatusCode;

async fn server() -> TestServer {
    let server = TestServer::start().await.expect("Failed to start server");
    seed(&server.store);
    server
}

async fn cast(server: &TestServer, request: &VoteRequest, expected: StatusCode) -> CastVoteBody {
    let response = server.post("/api/vote", request).await.unwrap();
    assert_json(response, expected).await.unwrap()
}

async fn reputation(server: &TestServer, user_id: i64) -> i64 {
    let response = server
        .get(&format!("/api/users/{user_id}/reputation"))
        .await
        .unwrap();
    let body: DataBody<ReputationBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.user_id, user_id.to_string());
    body.data.reputation
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = server().await;
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = server().await;
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Cast Vote Tests
// ============================================================================

#[tokio::test]
async fn test_first_upvote() {
    let server = server().await;

    let body = cast(&server, &VoteRequest::question(VOTER_ID, "upvoted"), StatusCode::CREATED).await;

    assert_eq!(body.message, "Voted");
    assert_eq!(body.data.vote_result, 1);
    let doc = body.data.document.expect("document");
    assert_eq!(doc.vote_type, "question");
    assert_eq!(doc.type_id, QUESTION_ID.to_string());
    assert_eq!(doc.vote_status, "upvoted");
    assert_eq!(doc.voted_by_id, VOTER_ID.to_string());
    assert!(doc.id.parse::<i64>().is_ok());
    assert!(!doc.created_at.is_empty());
    assert_eq!(reputation(&server, AUTHOR_ID).await, 1);
}

#[tokio::test]
async fn test_repeat_vote_withdraws() {
    let server = server().await;
    let request = VoteRequest::question(VOTER_ID, "upvoted");

    cast(&server, &request, StatusCode::CREATED).await;
    let body = cast(&server, &request, StatusCode::OK).await;

    assert_eq!(body.message, "Vote Withdrawn");
    assert!(body.data.document.is_none());
    assert_eq!(body.data.vote_result, 0);
    assert_eq!(reputation(&server, AUTHOR_ID).await, 0);
    assert_eq!(server.store.vote_count(), 0);
}

#[tokio::test]
async fn test_flip_up_to_down() {
    let server = server().await;

    cast(&server, &VoteRequest::question(VOTER_ID, "upvoted"), StatusCode::CREATED).await;
    let body = cast(&server, &VoteRequest::question(VOTER_ID, "downvoted"), StatusCode::CREATED).await;

    assert_eq!(body.message, "Vote Status Updated");
    assert_eq!(body.data.vote_result, -1);
    assert_eq!(body.data.document.unwrap().vote_status, "downvoted");
    assert_eq!(reputation(&server, AUTHOR_ID).await, -1);
}

#[tokio::test]
async fn test_flip_down_to_up() {
    let server = server().await;

    cast(&server, &VoteRequest::answer(VOTER_ID, "downvoted"), StatusCode::CREATED).await;
    assert_eq!(reputation(&server, AUTHOR_ID).await, -1);

    let body = cast(&server, &VoteRequest::answer(VOTER_ID, "upvoted"), StatusCode::CREATED).await;

    assert_eq!(body.message, "Vote Status Updated");
    assert_eq!(body.data.vote_result, 1);
    assert_eq!(reputation(&server, AUTHOR_ID).await, 1);
}

#[tokio::test]
async fn test_numeric_ids_accepted() {
    let server = server().await;

    let body = serde_json::json!({
        "votedByID": VOTER_ID,
        "VoteStatus": "upvoted",
        "type": "question",
        "typeID": QUESTION_ID
    });
    let response = server.post("/api/vote", &body).await.unwrap();
    let body: CastVoteBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.data.document.unwrap().type_id, QUESTION_ID.to_string());
}

#[tokio::test]
async fn test_global_tally_scope() {
    let server = TestServer::start_with_config(test_config(TallyScope::Global))
        .await
        .unwrap();
    seed(&server.store);

    cast(&server, &VoteRequest::question(OTHER_VOTER_ID, "upvoted"), StatusCode::CREATED).await;
    let body = cast(&server, &VoteRequest::question(VOTER_ID, "upvoted"), StatusCode::CREATED).await;

    assert_eq!(body.data.vote_result, 2);
    assert_eq!(reputation(&server, AUTHOR_ID).await, 2);
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_question() {
    let server = server().await;

    let mut request = VoteRequest::question(VOTER_ID, "upvoted");
    request.type_id = "999999".to_string();
    let response = server.post("/api/vote", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body.code, "UNKNOWN_QUESTION");
    assert!(body.message.contains("999999"));
    assert_eq!(server.store.vote_count(), 0);
    assert_eq!(reputation(&server, AUTHOR_ID).await, 0);
}

#[tokio::test]
async fn test_unknown_status_rejected() {
    let server = server().await;

    let response = server
        .post_raw(
            "/api/vote",
            r#"{"votedByID":"2000","VoteStatus":"sideways","type":"question","typeID":"50000"}"#,
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "INVALID_BODY");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let server = server().await;

    let response = server.post_raw("/api/vote", "{not json").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "INVALID_BODY");
}

#[tokio::test]
async fn test_zero_id_fails_validation() {
    let server = server().await;

    let mut request = VoteRequest::question(VOTER_ID, "upvoted");
    request.voted_by_id = "0".to_string();
    let response = server.post("/api/vote", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.code, "VALIDATION_ERROR");
    assert!(body.details.is_some());
}

// ============================================================================
// Read Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_tally_counts_all_voters() {
    let server = server().await;

    cast(&server, &VoteRequest::question(VOTER_ID, "upvoted"), StatusCode::CREATED).await;
    cast(&server, &VoteRequest::question(OTHER_VOTER_ID, "upvoted"), StatusCode::CREATED).await;

    let response = server
        .get(&format!("/api/votes/question/{QUESTION_ID}?votedByID={VOTER_ID}"))
        .await
        .unwrap();
    let body: DataBody<TallyBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.data.vote_type, "question");
    assert_eq!(body.data.type_id, QUESTION_ID.to_string());
    assert_eq!(body.data.upvotes, 2);
    assert_eq!(body.data.downvotes, 0);
    assert_eq!(body.data.vote_result, 2);
    assert_eq!(body.data.vote_status.as_deref(), Some("upvoted"));
}

#[tokio::test]
async fn test_tally_rejects_zero_voter() {
    let server = server().await;

    let response = server
        .get(&format!("/api/votes/question/{QUESTION_ID}?votedByID=0"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_tally_unknown_target() {
    let server = server().await;

    let response = server.get("/api/votes/answer/123").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.code, "UNKNOWN_ANSWER");
}

#[tokio::test]
async fn test_reputation_unknown_user() {
    let server = server().await;

    let response = server.get("/api/users/424242/reputation").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.code, "UNKNOWN_USER");
}
