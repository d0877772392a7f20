//! # qa-api
//!
//! REST API server for question/answer voting, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, serve};
pub use state::AppState;
