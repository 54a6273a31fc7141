//! Notification feed endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use haven_core::types::pagination::PageRequest;

use crate::dto::response::{MessageResponse, NotificationsResponse, UnreadCountResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// `GET /api/notifications` — the caller's feed, newest first.
pub async fn list(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Query(page): Query<PageRequest>,
) -> Result<Json<NotificationsResponse>, ApiError> {
    let notifications = state.notifications.list(&ctx, page).await?;
    Ok(Json(NotificationsResponse {
        success: true,
        notifications,
    }))
}

/// `GET /api/notifications/unread-count`.
pub async fn unread_count(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<UnreadCountResponse>, ApiError> {
    let count = state.notifications.unread_count(&ctx).await?;
    Ok(Json(UnreadCountResponse {
        success: true,
        count,
    }))
}

/// `PUT /api/notifications/{id}/read`.
pub async fn mark_read(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.notifications.mark_read(&ctx, id).await?;
    Ok(Json(MessageResponse::new("Notification marked as read")))
}

/// `DELETE /api/notifications/{id}` — dismiss.
pub async fn dismiss(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.notifications.dismiss(&ctx, id).await?;
    Ok(Json(MessageResponse::new("Notification dismissed")))
}
