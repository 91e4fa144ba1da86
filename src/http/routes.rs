use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Recording control
        .route("/journal/record/start", post(handlers::start_recording))
        .route(
            "/journal/record/stop/:session_id",
            post(handlers::stop_recording),
        )
        // Session and journal queries
        .route(
            "/journal/:session_id/status",
            get(handlers::get_session_status),
        )
        .route("/journal/timeline", get(handlers::get_timeline))
        // Browser clients talk to this directly
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
