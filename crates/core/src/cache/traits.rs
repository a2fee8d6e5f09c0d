use std::sync::Arc;

use async_trait::async_trait;

use crate::location::Location;

use super::Result;

/// A cached query result, shared between every reader of the same key.
pub type CachedLocations = Arc<Vec<Location>>;

/// Cache of location query results keyed by query shape.
///
/// Every operation is individually safe under concurrent access. Sequences of
/// operations are not atomic: callers that check, then query, then put can
/// race with each other and with `clear`.
#[async_trait]
pub trait LocationCache: Send + Sync {
    /// Returns true if a value is cached under the key.
    async fn contains(&self, key: &str) -> Result<bool>;

    /// Gets the cached value for a key.
    async fn get(&self, key: &str) -> Result<Option<CachedLocations>>;

    /// Stores a value under a key, replacing any previous value.
    async fn put(&self, key: &str, value: CachedLocations) -> Result<()>;

    /// Removes every cached value.
    async fn clear(&self) -> Result<()>;
}
