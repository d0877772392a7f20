//! Route handlers

pub mod health;
pub mod users;
pub mod votes;
