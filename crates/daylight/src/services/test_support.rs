//! Call-counting mock store shared by the service tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use daylight_core::cache::{CacheError, CachedLocations, LocationCache, Result as CacheResult};
use daylight_core::location::{sort_by_name, Location, SunriseSunset};
use daylight_core::storage::{
    LocationRepository, RepositoryError, Result, SunriseSunsetRepository,
};

/// Mock store implementing both repository traits.
///
/// Locations are kept with their associations embedded. Read and write calls
/// are counted so tests can tell cache hits from store queries.
#[derive(Default)]
pub struct MockStore {
    locations: RwLock<BTreeMap<i64, Location>>,
    records: RwLock<BTreeMap<i64, SunriseSunset>>,
    pub find_all_calls: AtomicUsize,
    pub find_by_id_calls: AtomicUsize,
    pub find_by_date_calls: AtomicUsize,
    pub save_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    /// When set, every write fails with `QueryFailed`.
    pub fail_writes: AtomicBool,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a location as-is. The location must carry an id.
    pub async fn insert_location(&self, location: Location) {
        let id = location.id.expect("seeded location needs an id");
        self.locations.write().await.insert(id, location);
    }

    /// Inserts a sunrise/sunset record as-is. The record must carry an id.
    pub async fn insert_record(&self, record: SunriseSunset) {
        let id = record.id.expect("seeded record needs an id");
        self.records.write().await.insert(id, record);
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::QueryFailed("mock write failure".to_string()));
        }
        Ok(())
    }

    fn next_id<T>(table: &BTreeMap<i64, T>) -> i64 {
        table.keys().next_back().copied().unwrap_or(0) + 1
    }

    fn store_location(table: &mut BTreeMap<i64, Location>, mut location: Location) -> Location {
        let id = match location.id {
            Some(id) if table.contains_key(&id) => id,
            _ => Self::next_id(table),
        };
        location.id = Some(id);
        table.insert(id, location.clone());
        location
    }
}

#[async_trait]
impl LocationRepository for MockStore {
    async fn find_all(&self) -> Result<Vec<Location>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.locations.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.locations.read().await.get(&id).cloned())
    }

    async fn save(&self, location: Location) -> Result<Location> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.check_writable()?;
        let mut table = self.locations.write().await;
        Ok(Self::store_location(&mut table, location))
    }

    async fn save_all(&self, locations: Vec<Location>) -> Result<Vec<Location>> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.check_writable()?;
        let mut table = self.locations.write().await;
        Ok(locations
            .into_iter()
            .map(|location| Self::store_location(&mut table, location))
            .collect())
    }

    async fn delete(&self, location: &Location) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_writable()?;
        if let Some(id) = location.id {
            self.locations.write().await.remove(&id);
        }
        Ok(())
    }

    async fn find_locations_by_sunrise_sunset_date(&self, date: &str) -> Result<Vec<Location>> {
        self.find_by_date_calls.fetch_add(1, Ordering::SeqCst);
        let mut found: Vec<Location> = self
            .locations
            .read()
            .await
            .values()
            .filter(|location| location.sunrise_sunsets.iter().any(|s| s.date == date))
            .cloned()
            .collect();
        sort_by_name(&mut found);
        Ok(found)
    }
}

#[async_trait]
impl SunriseSunsetRepository for MockStore {
    async fn find_all(&self) -> Result<Vec<SunriseSunset>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SunriseSunset>> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> Result<Vec<SunriseSunset>> {
        let records = self.records.read().await;
        let mut found: Vec<SunriseSunset> = Vec::new();
        for id in ids {
            if found.iter().any(|record| record.id == Some(*id)) {
                continue;
            }
            found.extend(records.get(id).cloned());
        }
        Ok(found)
    }

    async fn save(&self, mut record: SunriseSunset) -> Result<SunriseSunset> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.check_writable()?;
        let mut table = self.records.write().await;
        let id = match record.id {
            Some(id) if table.contains_key(&id) => id,
            _ => Self::next_id(&table),
        };
        record.id = Some(id);
        table.insert(id, record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_writable()?;
        self.records.write().await.remove(&id);
        Ok(())
    }

    async fn find_by_date(&self, date: &str) -> Result<Vec<SunriseSunset>> {
        self.find_by_date_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|record| record.date == date)
            .cloned()
            .collect())
    }
}

/// Cache whose every operation fails.
#[derive(Default)]
pub struct FailingCache;

#[async_trait]
impl LocationCache for FailingCache {
    async fn contains(&self, _key: &str) -> CacheResult<bool> {
        Err(CacheError::OperationFailed("down".to_string()))
    }

    async fn get(&self, _key: &str) -> CacheResult<Option<CachedLocations>> {
        Err(CacheError::OperationFailed("down".to_string()))
    }

    async fn put(&self, _key: &str, _value: CachedLocations) -> CacheResult<()> {
        Err(CacheError::OperationFailed("down".to_string()))
    }

    async fn clear(&self) -> CacheResult<()> {
        Err(CacheError::OperationFailed("down".to_string()))
    }
}
