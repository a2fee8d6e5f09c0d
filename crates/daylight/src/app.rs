use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        counter::{get_counter, reset_counter},
        health::livez,
        locations::{
            bulk_create_or_update, create_location, delete_location, get_location,
            list_locations, locations_by_date, update_location,
        },
        sunrise_sunsets::{
            create_sunrise_sunset, delete_sunrise_sunset, list_sunrise_sunsets,
            sunrise_sunsets_by_date, update_sunrise_sunset,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        // Location routes
        .route("/location", get(list_locations).post(create_location))
        .route("/location/by-date", get(locations_by_date))
        .route("/location/bulk", post(bulk_create_or_update))
        .route(
            "/location/{id}",
            get(get_location)
                .put(update_location)
                .delete(delete_location),
        )
        // Sunrise/sunset routes
        .route(
            "/sunrise-sunset",
            get(list_sunrise_sunsets).post(create_sunrise_sunset),
        )
        .route("/sunrise-sunset/by-date", get(sunrise_sunsets_by_date))
        .route(
            "/sunrise-sunset/{id}",
            put(update_sunrise_sunset).delete(delete_sunrise_sunset),
        )
        // Request counter
        .route("/counter", get(get_counter).delete(reset_counter))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
