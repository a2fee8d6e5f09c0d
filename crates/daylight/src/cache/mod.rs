//! Cache backend implementations.
//!
//! This module provides concrete implementations of the `LocationCache`
//! trait defined in `daylight_core::cache`.

pub mod memory;

pub use memory::MemoryLocationCache;
