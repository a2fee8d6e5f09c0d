//! SQLite repository implementation.
//!
//! Implements the repository traits from `daylight_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};
use tokio_rusqlite::Connection;

use daylight_core::location::{Location, SunriseSunset};
use daylight_core::storage::{
    LocationRepository, RepositoryError, Result, SunriseSunsetRepository,
};

use super::conversions::{association_ids, row_to_location, row_to_sunrise_sunset};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Loads the sunrise/sunset records linked to a location, in link order.
fn load_sunrise_sunsets(
    conn: &rusqlite::Connection,
    location_id: i64,
) -> rusqlite::Result<Vec<SunriseSunset>> {
    let mut stmt = conn.prepare(schema::SELECT_SUNRISE_SUNSETS_FOR_LOCATION)?;
    let rows = stmt.query_map(params![location_id], row_to_sunrise_sunset)?;
    rows.collect()
}

/// Fills in the associations of location rows read without them.
fn resolve_locations(
    conn: &rusqlite::Connection,
    mut locations: Vec<Location>,
) -> rusqlite::Result<Vec<Location>> {
    for location in &mut locations {
        if let Some(id) = location.id {
            location.sunrise_sunsets = load_sunrise_sunsets(conn, id)?;
        }
    }
    Ok(locations)
}

fn query_locations<P: rusqlite::Params>(
    conn: &rusqlite::Connection,
    sql: &str,
    params: P,
) -> rusqlite::Result<Vec<Location>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, row_to_location)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    resolve_locations(conn, rows)
}

fn find_location(conn: &rusqlite::Connection, id: i64) -> rusqlite::Result<Option<Location>> {
    let row = conn
        .query_row(schema::SELECT_LOCATION_BY_ID, params![id], row_to_location)
        .optional()?;
    match row {
        Some(mut location) => {
            location.sunrise_sunsets = load_sunrise_sunsets(conn, id)?;
            Ok(Some(location))
        }
        None => Ok(None),
    }
}

/// Writes a location row and rewrites its join rows. Returns the row id.
///
/// A location whose id is unknown to the store is inserted under a fresh id.
fn write_location(
    conn: &rusqlite::Connection,
    location: &Location,
    sunrise_sunset_ids: &[i64],
) -> rusqlite::Result<i64> {
    let existing = match location.id {
        Some(id) => {
            let exists: bool =
                conn.query_row(schema::LOCATION_EXISTS, params![id], |row| row.get(0))?;
            exists.then_some(id)
        }
        None => None,
    };

    let id = match existing {
        Some(id) => {
            conn.execute(
                schema::UPDATE_LOCATION,
                params![
                    id,
                    location.name,
                    location.country,
                    location.latitude,
                    location.longitude
                ],
            )?;
            conn.execute(schema::DELETE_LOCATION_LINKS, params![id])?;
            id
        }
        None => {
            conn.execute(
                schema::INSERT_LOCATION,
                params![
                    location.name,
                    location.country,
                    location.latitude,
                    location.longitude
                ],
            )?;
            conn.last_insert_rowid()
        }
    };

    for sunrise_sunset_id in sunrise_sunset_ids {
        conn.execute(schema::INSERT_LOCATION_LINK, params![id, sunrise_sunset_id])?;
    }

    Ok(id)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for locations and sunrise/sunset
/// records.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl LocationRepository for SqliteRepository {
    async fn find_all(&self) -> Result<Vec<Location>> {
        self.conn
            .call(|conn| {
                query_locations(conn, schema::SELECT_LOCATIONS, []).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>> {
        self.conn
            .call(move |conn| find_location(conn, id).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location"))
    }

    async fn save(&self, location: Location) -> Result<Location> {
        let sunrise_sunset_ids = association_ids(&location)?;

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let id = write_location(&tx, &location, &sunrise_sunset_ids).map_err(wrap_err)?;
                let saved = find_location(&tx, id)
                    .map_err(wrap_err)?
                    .ok_or_else(|| wrap_err(rusqlite::Error::QueryReturnedNoRows))?;
                tx.commit().map_err(wrap_err)?;
                Ok(saved)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location"))
    }

    async fn save_all(&self, locations: Vec<Location>) -> Result<Vec<Location>> {
        let batch = locations
            .into_iter()
            .map(|location| association_ids(&location).map(|ids| (location, ids)))
            .collect::<Result<Vec<_>>>()?;

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let mut saved = Vec::with_capacity(batch.len());
                for (location, sunrise_sunset_ids) in &batch {
                    let id = write_location(&tx, location, sunrise_sunset_ids).map_err(wrap_err)?;
                    let stored = find_location(&tx, id)
                        .map_err(wrap_err)?
                        .ok_or_else(|| wrap_err(rusqlite::Error::QueryReturnedNoRows))?;
                    saved.push(stored);
                }
                tx.commit().map_err(wrap_err)?;
                Ok(saved)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location"))
    }

    async fn delete(&self, location: &Location) -> Result<()> {
        let Some(id) = location.id else {
            return Ok(());
        };

        self.conn
            .call(move |conn| {
                // Join rows go with it through ON DELETE CASCADE.
                conn.execute(schema::DELETE_LOCATION, params![id])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location"))
    }

    async fn find_locations_by_sunrise_sunset_date(&self, date: &str) -> Result<Vec<Location>> {
        let date = date.to_string();

        self.conn
            .call(move |conn| {
                query_locations(
                    conn,
                    schema::SELECT_LOCATIONS_BY_SUNRISE_SUNSET_DATE,
                    params![date],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Location"))
    }
}

#[async_trait]
impl SunriseSunsetRepository for SqliteRepository {
    async fn find_all(&self) -> Result<Vec<SunriseSunset>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_SUNRISE_SUNSETS)
                    .map_err(wrap_err)?;
                let records = stmt
                    .query_map([], row_to_sunrise_sunset)
                    .map_err(wrap_err)?
                    .collect::<rusqlite::Result<Vec<_>>>()
                    .map_err(wrap_err)?;
                Ok(records)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "SunriseSunset"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SunriseSunset>> {
        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::SELECT_SUNRISE_SUNSET_BY_ID,
                    params![id],
                    row_to_sunrise_sunset,
                )
                .optional()
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "SunriseSunset"))
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> Result<Vec<SunriseSunset>> {
        let ids = ids.to_vec();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_SUNRISE_SUNSET_BY_ID)
                    .map_err(wrap_err)?;
                let mut found: Vec<SunriseSunset> = Vec::with_capacity(ids.len());
                for id in ids {
                    if found.iter().any(|record| record.id == Some(id)) {
                        continue;
                    }
                    let record = stmt
                        .query_row(params![id], row_to_sunrise_sunset)
                        .optional()
                        .map_err(wrap_err)?;
                    found.extend(record);
                }
                Ok(found)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "SunriseSunset"))
    }

    async fn save(&self, record: SunriseSunset) -> Result<SunriseSunset> {
        self.conn
            .call(move |conn| {
                let existing = match record.id {
                    Some(id) => {
                        let exists: bool = conn
                            .query_row(schema::SUNRISE_SUNSET_EXISTS, params![id], |row| {
                                row.get(0)
                            })
                            .map_err(wrap_err)?;
                        exists.then_some(id)
                    }
                    None => None,
                };

                let id = match existing {
                    Some(id) => {
                        conn.execute(
                            schema::UPDATE_SUNRISE_SUNSET,
                            params![
                                id,
                                record.date,
                                record.latitude,
                                record.longitude,
                                record.sunrise,
                                record.sunset
                            ],
                        )
                        .map_err(wrap_err)?;
                        id
                    }
                    None => {
                        conn.execute(
                            schema::INSERT_SUNRISE_SUNSET,
                            params![
                                record.date,
                                record.latitude,
                                record.longitude,
                                record.sunrise,
                                record.sunset
                            ],
                        )
                        .map_err(wrap_err)?;
                        conn.last_insert_rowid()
                    }
                };

                Ok(SunriseSunset {
                    id: Some(id),
                    ..record
                })
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "SunriseSunset"))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_SUNRISE_SUNSET, params![id])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "SunriseSunset"))
    }

    async fn find_by_date(&self, date: &str) -> Result<Vec<SunriseSunset>> {
        let date = date.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_SUNRISE_SUNSETS_BY_DATE)
                    .map_err(wrap_err)?;
                let records = stmt
                    .query_map(params![date], row_to_sunrise_sunset)
                    .map_err(wrap_err)?
                    .collect::<rusqlite::Result<Vec<_>>>()
                    .map_err(wrap_err)?;
                Ok(records)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "SunriseSunset"))
    }
}
