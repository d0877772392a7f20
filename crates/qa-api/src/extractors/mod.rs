//! Axum extractors for request handling

mod path;
mod validated;

pub use path::{UserIdPath, VoteTargetPath};
pub use validated::ValidatedJson;
