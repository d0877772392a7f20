//! Route definitions
//!
//! API routes are mounted under /api; health probes live at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, users, votes};
use crate::state::AppState;

/// Create the API router (health routes are separate so they bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(vote_routes())
        .merge(user_routes())
}

/// Vote routes
fn vote_routes() -> Router<AppState> {
    Router::new()
        .route("/vote", post(votes::cast_vote))
        .route("/votes/:vote_type/:type_id", get(votes::get_tally))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/:user_id/reputation", get(users::get_reputation))
}
