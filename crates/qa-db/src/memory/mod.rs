//! In-memory storage backend
//!
//! Implements every repository trait on a single [`MemoryStore`] so the
//! service can run without PostgreSQL. Contents live for the lifetime of the
//! process.

mod store;

pub use store::MemoryStore;
