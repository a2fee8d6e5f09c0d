//! In-memory location cache.
//!
//! Unbounded and without expiry: entries live until the next `clear`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use daylight_core::cache::{CachedLocations, LocationCache, Result};

/// In-memory location cache.
///
/// Thread-safe cache using `Arc<RwLock<HashMap>>` for concurrent access.
/// Values are shared `Arc`s, so a hit hands back the very value that was
/// stored.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocationCache {
    store: Arc<RwLock<HashMap<String, CachedLocations>>>,
}

impl MemoryLocationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached keys.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if nothing is cached.
    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl LocationCache for MemoryLocationCache {
    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.store.read().await.contains_key(key))
    }

    async fn get(&self, key: &str) -> Result<Option<CachedLocations>> {
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: CachedLocations) -> Result<()> {
        self.store.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.store.write().await.clear();
        Ok(())
    }
}
