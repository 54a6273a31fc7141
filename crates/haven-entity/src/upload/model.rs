//! Uploaded file entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored upload record (listing images).
///
/// On delete, the database row is always removed; removal of the backing
/// object is best-effort.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Unique file identifier.
    pub id: Uuid,
    /// Stored filename.
    pub filename: String,
    /// Public URL.
    pub url: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// MIME type.
    pub mime_type: String,
    /// Uploading user.
    pub uploaded_by: Uuid,
    /// Listing the image belongs to, if attached.
    pub listing_id: Option<Uuid>,
    /// File category; only `image` is used.
    pub file_type: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
