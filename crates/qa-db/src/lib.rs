//! # qa-db
//!
//! Storage layer implementing the `qa-core` repository traits.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations for PostgreSQL
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - PostgreSQL repository implementations
//! - [`MemoryStore`], a process-local implementation of the same traits
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qa_db::pool::{create_pool, run_migrations, PoolConfig};
//! use qa_db::repositories::PgVoteRepository;
//!
//! async fn example(url: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::new(url)).await?;
//!     run_migrations(&pool, "./migrations").await?;
//!     let votes = PgVoteRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgReputationRepository, PgTargetRepository, PgVoteRepository};
