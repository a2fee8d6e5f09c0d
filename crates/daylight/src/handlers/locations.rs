//! Location CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use daylight_core::cache::CachedLocations;
use daylight_core::location::{validate_location, Location};
use daylight_core::storage::RepositoryError;

use super::{sunrise_sunset_ids, AppError, BadRequest};
use crate::{
    models::{DateQuery, SunriseSunsetIdsQuery},
    state::AppState,
};

/// List all locations (GET /api/location).
pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<CachedLocations>, AppError> {
    Ok(Json(state.locations.get_all().await?))
}

/// Get a single location by ID (GET /api/location/{id}).
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Location>, AppError> {
    state
        .locations
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| RepositoryError::not_found("Location", id).into())
}

/// Locations with a sunrise/sunset record on a date (GET /api/location/by-date).
pub async fn locations_by_date(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<CachedLocations>, AppError> {
    let date = query
        .date()
        .ok_or_else(|| BadRequest("Query parameter 'date' is required".to_string()))?;

    Ok(Json(state.locations.get_locations_by_date(date).await?))
}

/// Create a new location (POST /api/location).
pub async fn create_location(
    State(state): State<AppState>,
    Query(query): Query<SunriseSunsetIdsQuery>,
    body: Result<Json<Location>, JsonRejection>,
) -> Result<Json<Location>, AppError> {
    let Json(payload) = body?;
    validate_location(&payload)?;
    let ids = sunrise_sunset_ids(&query)?.unwrap_or_default();

    let location = state.locations.create(payload, &ids).await?;

    tracing::info!(location_id = ?location.id, name = %location.name, "Created new location");

    Ok(Json(location))
}

/// Create or update a batch of locations (POST /api/location/bulk).
pub async fn bulk_create_or_update(
    State(state): State<AppState>,
    Query(query): Query<SunriseSunsetIdsQuery>,
    body: Result<Json<Vec<Location>>, JsonRejection>,
) -> Result<Json<Vec<Location>>, AppError> {
    let Json(payload) = body?;
    for location in &payload {
        validate_location(location)?;
    }
    let ids = sunrise_sunset_ids(&query)?.unwrap_or_default();

    let locations = state
        .locations
        .bulk_create_or_update(payload, &ids)
        .await?;

    tracing::info!(count = locations.len(), "Bulk saved locations");

    Ok(Json(locations))
}

/// Update a location by ID (PUT /api/location/{id}).
///
/// A present-but-empty `sunriseSunsetIds` clears the associations; an absent
/// one leaves them as they are.
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<SunriseSunsetIdsQuery>,
    body: Result<Json<Location>, JsonRejection>,
) -> Result<Json<Location>, AppError> {
    let Json(payload) = body?;
    validate_location(&payload)?;
    let ids = sunrise_sunset_ids(&query)?;

    let location = state
        .locations
        .update(id, payload, ids)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Location", id))?;

    tracing::info!(location_id = id, "Updated location");

    Ok(Json(location))
}

/// Delete a location by ID (DELETE /api/location/{id}).
pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.locations.delete(id).await? {
        return Err(RepositoryError::not_found("Location", id).into());
    }

    tracing::info!(location_id = id, "Deleted location");

    Ok(StatusCode::NO_CONTENT)
}
