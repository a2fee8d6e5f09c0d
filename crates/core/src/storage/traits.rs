use async_trait::async_trait;

use crate::location::{Location, SunriseSunset};

use super::Result;

/// Store access for locations and their sunrise/sunset associations.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Gets every location with its associations resolved, ordered by id.
    async fn find_all(&self) -> Result<Vec<Location>>;

    /// Gets a location by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Location>>;

    /// Persists a location and its association rows.
    ///
    /// Assigns an id when `location.id` is `None`. Returns the stored record.
    async fn save(&self, location: Location) -> Result<Location>;

    /// Persists a batch of locations, preserving input order.
    async fn save_all(&self, locations: Vec<Location>) -> Result<Vec<Location>>;

    /// Deletes a location and its association rows.
    async fn delete(&self, location: &Location) -> Result<()>;

    /// Gets the locations associated with at least one sunrise/sunset record
    /// whose date equals `date`, ordered by name ascending.
    async fn find_locations_by_sunrise_sunset_date(&self, date: &str) -> Result<Vec<Location>>;
}

/// Store access for sunrise/sunset records.
#[async_trait]
pub trait SunriseSunsetRepository: Send + Sync {
    /// Gets every record, ordered by id.
    async fn find_all(&self) -> Result<Vec<SunriseSunset>>;

    /// Gets a record by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<SunriseSunset>>;

    /// Gets the records matching the given ids. Unknown ids are skipped.
    async fn find_all_by_id(&self, ids: &[i64]) -> Result<Vec<SunriseSunset>>;

    /// Persists a record, assigning an id when it has none.
    async fn save(&self, record: SunriseSunset) -> Result<SunriseSunset>;

    /// Deletes a record by id. Deleting an unknown id is a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Gets the records whose date equals `date`.
    async fn find_by_date(&self, date: &str) -> Result<Vec<SunriseSunset>>;
}
