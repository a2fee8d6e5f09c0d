//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use daylight_core::location::{Location, SunriseSunset};
use daylight_core::storage::RepositoryError;
use rusqlite::Row;

/// Convert a SQLite row to a Location without associations.
///
/// Expected columns: id, name, country, latitude, longitude
pub fn row_to_location(row: &Row) -> rusqlite::Result<Location> {
    Ok(Location {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        country: row.get(2)?,
        latitude: row.get(3)?,
        longitude: row.get(4)?,
        sunrise_sunsets: Vec::new(),
    })
}

/// Convert a SQLite row to a SunriseSunset.
///
/// Expected columns: id, date, latitude, longitude, sunrise, sunset
pub fn row_to_sunrise_sunset(row: &Row) -> rusqlite::Result<SunriseSunset> {
    Ok(SunriseSunset {
        id: Some(row.get(0)?),
        date: row.get(1)?,
        latitude: row.get(2)?,
        longitude: row.get(3)?,
        sunrise: row.get(4)?,
        sunset: row.get(5)?,
    })
}

/// Collects the join-table ids of a location's associations.
///
/// Every associated record must already be persisted. Duplicates are dropped.
pub fn association_ids(location: &Location) -> Result<Vec<i64>, RepositoryError> {
    let mut ids = Vec::with_capacity(location.sunrise_sunsets.len());
    for record in &location.sunrise_sunsets {
        let id = record.id.ok_or_else(|| {
            RepositoryError::InvalidData("Cannot associate an unsaved SunriseSunset".to_string())
        })?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}
