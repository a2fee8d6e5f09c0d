//! Location service with a cache-aside read path.

use std::sync::Arc;

use daylight_core::cache::{
    all_locations_key, location_key, locations_by_date_key, CachedLocations, LocationCache,
};
use daylight_core::counter::RequestCounter;
use daylight_core::location::{
    apply_location_update, attach_sunrise_sunsets, replace_sunrise_sunsets, Location,
    SunriseSunset,
};
use daylight_core::storage::{LocationRepository, Result, SunriseSunsetRepository};

/// Location operations over a repository and a shared location cache.
///
/// Reads check the cache first and populate it on a miss. Writes persist
/// first and then clear the entire cache. Not-found results are never cached.
#[derive(Clone)]
pub struct LocationService {
    locations: Arc<dyn LocationRepository>,
    sunrise_sunsets: Arc<dyn SunriseSunsetRepository>,
    cache: Arc<dyn LocationCache>,
    counter: RequestCounter,
}

impl LocationService {
    pub fn new(
        locations: Arc<dyn LocationRepository>,
        sunrise_sunsets: Arc<dyn SunriseSunsetRepository>,
        cache: Arc<dyn LocationCache>,
        counter: RequestCounter,
    ) -> Self {
        Self {
            locations,
            sunrise_sunsets,
            cache,
            counter,
        }
    }

    /// Gets every location with its associations.
    pub async fn get_all(&self) -> Result<CachedLocations> {
        self.counter.increment();
        let key = all_locations_key();

        if let Some(cached) = self.lookup(&key).await {
            return Ok(cached);
        }

        let locations: CachedLocations = Arc::new(self.locations.find_all().await?);
        self.populate(&key, locations.clone()).await;
        Ok(locations)
    }

    /// Gets a location by id. A missing location is not cached.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Location>> {
        self.counter.increment();
        let key = location_key(id);

        if let Some(location) = self.lookup(&key).await.and_then(|v| v.first().cloned()) {
            return Ok(Some(location));
        }

        let location = self.locations.find_by_id(id).await?;
        if let Some(ref found) = location {
            self.populate(&key, Arc::new(vec![found.clone()])).await;
        }
        Ok(location)
    }

    /// Gets the locations tied to a sunrise/sunset record on `date`, by name.
    pub async fn get_locations_by_date(&self, date: &str) -> Result<CachedLocations> {
        self.counter.increment();
        let key = locations_by_date_key(date);

        if let Some(cached) = self.lookup(&key).await {
            return Ok(cached);
        }

        let locations: CachedLocations = Arc::new(
            self.locations
                .find_locations_by_sunrise_sunset_date(date)
                .await?,
        );
        self.populate(&key, locations.clone()).await;
        Ok(locations)
    }

    /// Creates a location, attaching the sunrise/sunset records found for
    /// `sunrise_sunset_ids`. Unknown ids are dropped.
    pub async fn create(
        &self,
        mut location: Location,
        sunrise_sunset_ids: &[i64],
    ) -> Result<Location> {
        self.counter.increment();

        if !sunrise_sunset_ids.is_empty() {
            let records = self.resolve(sunrise_sunset_ids).await?;
            attach_sunrise_sunsets(&mut location, &records);
        }

        let saved = self.locations.save(location).await?;
        self.invalidate_all().await;

        tracing::debug!(location_id = ?saved.id, "Location created");
        Ok(saved)
    }

    /// Updates name and country of an existing location.
    ///
    /// `Some(ids)` replaces the associations (an empty list clears them),
    /// `None` keeps them. Returns `None` when the location does not exist.
    pub async fn update(
        &self,
        id: i64,
        updated: Location,
        sunrise_sunset_ids: Option<Vec<i64>>,
    ) -> Result<Option<Location>> {
        self.counter.increment();

        let Some(mut location) = self.locations.find_by_id(id).await? else {
            tracing::debug!(location_id = id, "Location to update not found");
            return Ok(None);
        };

        apply_location_update(&mut location, &updated);
        if let Some(ids) = sunrise_sunset_ids {
            let records = self.resolve(&ids).await?;
            replace_sunrise_sunsets(&mut location, &records);
        }

        let saved = self.locations.save(location).await?;
        self.invalidate_all().await;

        tracing::debug!(location_id = id, "Location updated");
        Ok(Some(saved))
    }

    /// Deletes a location. Returns false when it does not exist.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.counter.increment();

        let Some(location) = self.locations.find_by_id(id).await? else {
            tracing::debug!(location_id = id, "Location to delete not found");
            return Ok(false);
        };

        self.locations.delete(&location).await?;
        self.invalidate_all().await;

        tracing::debug!(location_id = id, "Location deleted");
        Ok(true)
    }

    /// Creates or updates a batch of locations in one store call.
    ///
    /// The ids are resolved once and the same records are attached to every
    /// location. An input with an id that exists in the store is updated in
    /// place; anything else is saved as new. Input order is preserved.
    pub async fn bulk_create_or_update(
        &self,
        locations: Vec<Location>,
        sunrise_sunset_ids: &[i64],
    ) -> Result<Vec<Location>> {
        self.counter.increment();

        let records = if sunrise_sunset_ids.is_empty() {
            Vec::new()
        } else {
            self.resolve(sunrise_sunset_ids).await?
        };

        let mut batch = Vec::with_capacity(locations.len());
        for mut input in locations {
            let existing = match input.id {
                Some(id) => self.locations.find_by_id(id).await?,
                None => None,
            };

            match existing {
                Some(mut location) => {
                    apply_location_update(&mut location, &input);
                    replace_sunrise_sunsets(&mut location, &records);
                    batch.push(location);
                }
                None => {
                    attach_sunrise_sunsets(&mut input, &records);
                    batch.push(input);
                }
            }
        }

        let saved = self.locations.save_all(batch).await?;
        self.invalidate_all().await;

        tracing::debug!(count = saved.len(), "Locations bulk saved");
        Ok(saved)
    }

    async fn resolve(&self, ids: &[i64]) -> Result<Vec<SunriseSunset>> {
        self.sunrise_sunsets.find_all_by_id(ids).await
    }

    /// Reads a key from the cache. A failing cache counts as a miss.
    async fn lookup(&self, key: &str) -> Option<CachedLocations> {
        match self.cache.get(key).await {
            Ok(Some(cached)) => {
                tracing::debug!(key, count = cached.len(), "Cache hit");
                Some(cached)
            }
            Ok(None) => {
                tracing::debug!(key, "Cache miss");
                None
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "Cache read failed");
                None
            }
        }
    }

    async fn populate(&self, key: &str, value: CachedLocations) {
        if let Err(err) = self.cache.put(key, value).await {
            tracing::warn!(key, error = %err, "Failed to cache locations");
        }
    }

    /// Clears every cached key. All write paths go through here.
    async fn invalidate_all(&self) {
        match self.cache.clear().await {
            Ok(()) => tracing::debug!("Location cache cleared"),
            Err(err) => tracing::warn!(error = %err, "Failed to clear location cache"),
        }
    }
}
