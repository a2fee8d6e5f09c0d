//! Request counter handlers.

use axum::{extract::State, http::StatusCode, Json};

use crate::state::AppState;

/// Current request count (GET /api/counter).
pub async fn get_counter(State(state): State<AppState>) -> Json<u64> {
    Json(state.counter.get())
}

/// Reset the request count (DELETE /api/counter).
pub async fn reset_counter(State(state): State<AppState>) -> StatusCode {
    state.counter.reset();
    tracing::info!("Request counter reset");
    StatusCode::NO_CONTENT
}
