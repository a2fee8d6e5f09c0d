//! In-memory cache backend implementation.
//!
//! Provides a thread-safe, process-local location cache.

mod cache;

pub use cache::MemoryLocationCache;
