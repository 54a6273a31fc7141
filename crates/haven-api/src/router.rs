//! Route table and middleware stack.

use axum::http::HeaderValue;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::handlers;
use crate::state::AppState;

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.allowed_origins);

    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route(
            "/api/inspections",
            post(handlers::inspection::create).get(handlers::inspection::list),
        )
        .route(
            "/api/inspections/available-jobs",
            get(handlers::inspection::available_jobs),
        )
        .route(
            "/api/inspections/{id}/accept",
            post(handlers::inspection::accept),
        )
        .route(
            "/api/inspections/{id}/status",
            put(handlers::inspection::update_status),
        )
        .route("/api/notifications", get(handlers::notification::list))
        .route(
            "/api/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/api/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/api/notifications/{id}",
            delete(handlers::notification::dismiss),
        )
        .route(
            "/api/listings",
            get(handlers::listing::list).post(handlers::listing::create),
        )
        .route("/api/listings/{id}", get(handlers::listing::get))
        .route("/api/uploads", post(handlers::upload::register))
        .route("/api/uploads/{id}", delete(handlers::upload::delete))
        .route("/ws", get(handlers::ws::upgrade))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
