//! Sunrise/sunset CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use daylight_core::location::{validate_sunrise_sunset, SunriseSunset};

use super::{AppError, BadRequest};
use crate::{models::DateQuery, state::AppState};

/// List all sunrise/sunset records (GET /api/sunrise-sunset).
pub async fn list_sunrise_sunsets(
    State(state): State<AppState>,
) -> Result<Json<Vec<SunriseSunset>>, AppError> {
    Ok(Json(state.sunrise_sunsets.get_all().await?))
}

/// Create a sunrise/sunset record (POST /api/sunrise-sunset).
pub async fn create_sunrise_sunset(
    State(state): State<AppState>,
    body: Result<Json<SunriseSunset>, JsonRejection>,
) -> Result<Json<SunriseSunset>, AppError> {
    let Json(payload) = body?;
    validate_sunrise_sunset(&payload)?;

    let record = state.sunrise_sunsets.create(payload).await?;

    tracing::info!(sunrise_sunset_id = ?record.id, date = %record.date, "Created sunrise/sunset record");

    Ok(Json(record))
}

/// Update a sunrise/sunset record (PUT /api/sunrise-sunset/{id}).
pub async fn update_sunrise_sunset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<SunriseSunset>, JsonRejection>,
) -> Result<Json<SunriseSunset>, AppError> {
    let Json(payload) = body?;
    validate_sunrise_sunset(&payload)?;

    let record = state.sunrise_sunsets.update(id, payload).await?;

    tracing::info!(sunrise_sunset_id = id, "Updated sunrise/sunset record");

    Ok(Json(record))
}

/// Delete a sunrise/sunset record (DELETE /api/sunrise-sunset/{id}).
///
/// Deleting an unknown id succeeds.
pub async fn delete_sunrise_sunset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.sunrise_sunsets.delete(id).await?;

    tracing::info!(sunrise_sunset_id = id, "Deleted sunrise/sunset record");

    Ok(StatusCode::OK)
}

/// Records on a date (GET /api/sunrise-sunset/by-date).
pub async fn sunrise_sunsets_by_date(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<SunriseSunset>>, AppError> {
    let date = query
        .date()
        .ok_or_else(|| BadRequest("Query parameter 'date' is required".to_string()))?;

    Ok(Json(state.sunrise_sunsets.get_by_date(date).await?))
}
