//! Uncached sunrise/sunset service.

use std::sync::Arc;

use daylight_core::counter::RequestCounter;
use daylight_core::location::{apply_sunrise_sunset_update, SunriseSunset};
use daylight_core::storage::{RepositoryError, Result, SunriseSunsetRepository};

/// Pass-through CRUD for sunrise/sunset records.
#[derive(Clone)]
pub struct SunriseSunsetService {
    repository: Arc<dyn SunriseSunsetRepository>,
    counter: RequestCounter,
}

impl SunriseSunsetService {
    pub fn new(repository: Arc<dyn SunriseSunsetRepository>, counter: RequestCounter) -> Self {
        Self {
            repository,
            counter,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<SunriseSunset>> {
        self.counter.increment();
        self.repository.find_all().await
    }

    pub async fn create(&self, record: SunriseSunset) -> Result<SunriseSunset> {
        self.counter.increment();
        let saved = self.repository.save(record).await?;
        tracing::debug!(sunrise_sunset_id = ?saved.id, date = %saved.date, "SunriseSunset created");
        Ok(saved)
    }

    /// Overwrites every mutable field of an existing record.
    ///
    /// Fails with `RepositoryError::NotFound` when `id` does not exist.
    pub async fn update(&self, id: i64, updated: SunriseSunset) -> Result<SunriseSunset> {
        self.counter.increment();

        let mut record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("SunriseSunset", id))?;

        apply_sunrise_sunset_update(&mut record, &updated);
        let saved = self.repository.save(record).await?;

        tracing::debug!(sunrise_sunset_id = id, "SunriseSunset updated");
        Ok(saved)
    }

    /// Deletes by id. Unknown ids are a silent no-op.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.counter.increment();
        self.repository.delete_by_id(id).await
    }

    pub async fn get_by_date(&self, date: &str) -> Result<Vec<SunriseSunset>> {
        self.counter.increment();
        self.repository.find_by_date(date).await
    }
}
