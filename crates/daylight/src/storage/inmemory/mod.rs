//! In-memory storage backend.
//!
//! Keeps rows in `tokio::sync::RwLock` maps. Useful for local development
//! and tests; nothing survives a restart.

mod repository;

pub use repository::InMemoryRepository;
