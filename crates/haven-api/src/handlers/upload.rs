//! Upload record endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use haven_service::upload::RegisterUpload;

use crate::dto::request::RegisterUploadRequest;
use crate::dto::response::{MessageResponse, UploadResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// `POST /api/uploads` — register metadata for a stored object.
pub async fn register(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    ValidatedJson(body): ValidatedJson<RegisterUploadRequest>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let upload = state
        .uploads
        .register(
            &ctx,
            RegisterUpload {
                filename: body.filename,
                url: body.url,
                size_bytes: body.size_bytes,
                mime_type: body.mime_type,
                listing_id: body.listing_id,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            success: true,
            upload,
        }),
    ))
}

/// `DELETE /api/uploads/{id}` — uploader or platform admin.
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.uploads.delete(&ctx, id).await?;
    Ok(Json(MessageResponse::new("Upload deleted")))
}
