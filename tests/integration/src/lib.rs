//! Integration test utilities for the vote API
//!
//! Spawns the real Axum application on an ephemeral port, backed by a
//! seeded in-memory store, and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
