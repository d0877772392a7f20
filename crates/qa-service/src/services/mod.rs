//! Business logic services
//!
//! Services orchestrate repository calls and turn domain results into DTOs.

pub mod context;
pub mod error;
pub mod vote;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use vote::VoteService;
