//! # qa-service
//!
//! Application layer: vote processing, read models, and DTOs.

pub mod dto;
pub mod services;

pub use services::{ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, VoteService};
