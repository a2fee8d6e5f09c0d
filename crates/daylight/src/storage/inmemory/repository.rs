//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use daylight_core::location::{sort_by_name, Location, SunriseSunset};
use daylight_core::storage::{
    LocationRepository, RepositoryError, Result, SunriseSunsetRepository,
};

/// A location as stored: the join table is folded into the row as ids.
#[derive(Debug, Clone)]
struct LocationRow {
    id: i64,
    name: String,
    country: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    sunrise_sunset_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    locations: BTreeMap<i64, LocationRow>,
    sunrise_sunsets: BTreeMap<i64, SunriseSunset>,
    last_location_id: i64,
    last_sunrise_sunset_id: i64,
}

impl Tables {
    fn next_location_id(&mut self) -> i64 {
        self.last_location_id += 1;
        self.last_location_id
    }

    fn next_sunrise_sunset_id(&mut self) -> i64 {
        self.last_sunrise_sunset_id += 1;
        self.last_sunrise_sunset_id
    }

    /// Resolves a stored row into a full location aggregate.
    fn resolve(&self, row: &LocationRow) -> Location {
        let sunrise_sunsets = row
            .sunrise_sunset_ids
            .iter()
            .filter_map(|id| self.sunrise_sunsets.get(id).cloned())
            .collect();

        Location {
            id: Some(row.id),
            name: row.name.clone(),
            country: row.country.clone(),
            latitude: row.latitude,
            longitude: row.longitude,
            sunrise_sunsets,
        }
    }

    /// Validates association ids, then inserts or updates the row.
    fn save_location(&mut self, location: Location) -> Result<Location> {
        let mut sunrise_sunset_ids = Vec::with_capacity(location.sunrise_sunsets.len());
        for record in &location.sunrise_sunsets {
            let id = record.id.ok_or_else(|| {
                RepositoryError::InvalidData(
                    "Cannot associate an unsaved SunriseSunset".to_string(),
                )
            })?;
            if !self.sunrise_sunsets.contains_key(&id) {
                return Err(RepositoryError::InvalidData(format!(
                    "SunriseSunset {id} does not exist"
                )));
            }
            if !sunrise_sunset_ids.contains(&id) {
                sunrise_sunset_ids.push(id);
            }
        }

        let id = match location.id {
            Some(id) if self.locations.contains_key(&id) => id,
            _ => self.next_location_id(),
        };

        let row = LocationRow {
            id,
            name: location.name,
            country: location.country,
            latitude: location.latitude,
            longitude: location.longitude,
            sunrise_sunset_ids,
        };
        let saved = self.resolve(&row);
        self.locations.insert(id, row);
        Ok(saved)
    }
}

/// In-memory storage backend.
///
/// All tables sit behind a single lock so that a batch save is atomic.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocationRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Location>> {
        let tables = self.tables.read().await;
        Ok(tables
            .locations
            .values()
            .map(|row| tables.resolve(row))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>> {
        let tables = self.tables.read().await;
        Ok(tables.locations.get(&id).map(|row| tables.resolve(row)))
    }

    async fn save(&self, location: Location) -> Result<Location> {
        let mut tables = self.tables.write().await;
        tables.save_location(location)
    }

    async fn save_all(&self, locations: Vec<Location>) -> Result<Vec<Location>> {
        let mut tables = self.tables.write().await;

        // Validate against a scratch copy so a failure leaves no partial batch.
        let mut scratch = (*tables).clone();
        let saved = locations
            .into_iter()
            .map(|location| scratch.save_location(location))
            .collect::<Result<Vec<_>>>()?;

        *tables = scratch;
        Ok(saved)
    }

    async fn delete(&self, location: &Location) -> Result<()> {
        if let Some(id) = location.id {
            self.tables.write().await.locations.remove(&id);
        }
        Ok(())
    }

    async fn find_locations_by_sunrise_sunset_date(&self, date: &str) -> Result<Vec<Location>> {
        let tables = self.tables.read().await;
        let mut locations: Vec<Location> = tables
            .locations
            .values()
            .filter(|row| {
                row.sunrise_sunset_ids.iter().any(|id| {
                    tables
                        .sunrise_sunsets
                        .get(id)
                        .is_some_and(|record| record.date == date)
                })
            })
            .map(|row| tables.resolve(row))
            .collect();

        sort_by_name(&mut locations);
        Ok(locations)
    }
}

#[async_trait]
impl SunriseSunsetRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<SunriseSunset>> {
        let tables = self.tables.read().await;
        Ok(tables.sunrise_sunsets.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SunriseSunset>> {
        let tables = self.tables.read().await;
        Ok(tables.sunrise_sunsets.get(&id).cloned())
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> Result<Vec<SunriseSunset>> {
        let tables = self.tables.read().await;
        let mut found: Vec<SunriseSunset> = Vec::with_capacity(ids.len());
        for id in ids {
            if found.iter().any(|record| record.id == Some(*id)) {
                continue;
            }
            if let Some(record) = tables.sunrise_sunsets.get(id) {
                found.push(record.clone());
            }
        }
        Ok(found)
    }

    async fn save(&self, mut record: SunriseSunset) -> Result<SunriseSunset> {
        let mut tables = self.tables.write().await;
        let id = match record.id {
            Some(id) if tables.sunrise_sunsets.contains_key(&id) => id,
            _ => tables.next_sunrise_sunset_id(),
        };
        record.id = Some(id);
        tables.sunrise_sunsets.insert(id, record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.sunrise_sunsets.remove(&id).is_some() {
            // Cascade to the join rows.
            for row in tables.locations.values_mut() {
                row.sunrise_sunset_ids.retain(|linked| *linked != id);
            }
        }
        Ok(())
    }

    async fn find_by_date(&self, date: &str) -> Result<Vec<SunriseSunset>> {
        let tables = self.tables.read().await;
        Ok(tables
            .sunrise_sunsets
            .values()
            .filter(|record| record.date == date)
            .cloned()
            .collect())
    }
}
