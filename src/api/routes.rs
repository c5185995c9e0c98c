use crate::api::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the main API router.
///
/// Unmatched paths fall through to the static UI directory.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health_check))
        // Incident management
        .route(
            "/api/incidents",
            get(handlers::list_incidents).post(handlers::create_incident),
        )
        .route(
            "/api/incidents/:id",
            get(handlers::get_incident).put(handlers::update_incident),
        )
        .route("/api/incidents/:id/notes", post(handlers::add_note))
        // Browser UI
        .fallback_service(ServeDir::new(static_dir))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        .layer(CorsLayer::permissive())
}
