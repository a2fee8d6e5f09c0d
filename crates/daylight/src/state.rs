//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The storage backend is picked at compile time via
//! feature flags; the location cache is always the in-memory one.

use std::sync::Arc;

use daylight_core::cache::LocationCache;
use daylight_core::counter::RequestCounter;
use daylight_core::storage::{LocationRepository, SunriseSunsetRepository};

use crate::services::{LocationService, SunriseSunsetService};

/// Shared application state.
///
/// Cloned for each request handler. Both services share one request counter.
#[derive(Clone)]
pub struct AppState {
    pub locations: LocationService,
    pub sunrise_sunsets: SunriseSunsetService,
    pub counter: RequestCounter,
}

impl AppState {
    /// Wires the services over the given repositories and cache.
    fn build(
        location_repo: Arc<dyn LocationRepository>,
        sunrise_sunset_repo: Arc<dyn SunriseSunsetRepository>,
        cache: Arc<dyn LocationCache>,
    ) -> Self {
        let counter = RequestCounter::new();

        Self {
            locations: LocationService::new(
                location_repo,
                sunrise_sunset_repo.clone(),
                cache,
                counter.clone(),
            ),
            sunrise_sunsets: SunriseSunsetService::new(sunrise_sunset_repo, counter.clone()),
            counter,
        }
    }
}

// ============================================================================
// Feature-specific constructors
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryLocationCache;
    use crate::config::Config;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryLocationCache::new());

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage");

            Ok(Self::build(sqlite_repo.clone(), sqlite_repo, memory_cache))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryLocationCache;
    use crate::config::Config;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage. Data is lost on restart.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryLocationCache::new());

            tracing::info!("Using in-memory storage");

            Ok(Self::build(inmemory_repo.clone(), inmemory_repo, memory_cache))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    use daylight_core::location::{Location, SunriseSunset};

    #[tokio::test]
    async fn test_services_share_counter() {
        let state = AppState::default();

        state.locations.get_all().await.unwrap();
        state
            .sunrise_sunsets
            .create(SunriseSunset::new("2025-04-04"))
            .await
            .unwrap();
        state
            .locations
            .create(Location::new("Minsk", "Belarus"), &[])
            .await
            .unwrap();

        assert_eq!(state.counter.get(), 3);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let state = AppState::default();
        let clone = state.clone();

        clone
            .locations
            .create(Location::new("Minsk", "Belarus"), &[])
            .await
            .unwrap();

        assert_eq!(state.locations.get_all().await.unwrap().len(), 1);
        assert_eq!(state.counter.get(), 2);
    }
}
