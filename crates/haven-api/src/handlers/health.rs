//! Health endpoint.

use axum::extract::State;
use axum::Json;
use tracing::warn;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// `GET /api/health` — unauthenticated liveness and dependency report.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match haven_database::connection::health_check(&state.db).await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        connections: state.registry.connection_count(),
        users_online: state.registry.user_count(),
    })
}
