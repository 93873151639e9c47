//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put},
    Router,
};
use tower_http::services::ServeDir;

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
///
/// Anything that is not an API or health route is served from the static
/// directory, which is also where uploaded images end up.
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.settings.uploads.static_dir);
    let body_limit = state.settings.uploads.max_upload_bytes;

    Router::new()
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// REST API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/salon",
            get(handlers::salon::list_salons).post(handlers::salon::create_salon),
        )
        .route("/salons", get(handlers::salon::list_salon_summaries))
        .route(
            "/salon/{salon_id}",
            get(handlers::salon::get_salon)
                .put(handlers::salon::update_salon)
                .delete(handlers::salon::delete_salon),
        )
        .route(
            "/salon/{salon_id}/service",
            get(handlers::service::list_services).post(handlers::service::create_service),
        )
        .route(
            "/service/{service_id}",
            put(handlers::service::update_service).delete(handlers::service::delete_service),
        )
}
