//! Functional core for daylight.
//!
//! Domain types, pure operations and the port traits (storage and cache)
//! that the `daylight` binary implements. Nothing in this crate performs I/O.

pub mod cache;
pub mod counter;
pub mod location;
pub mod storage;
