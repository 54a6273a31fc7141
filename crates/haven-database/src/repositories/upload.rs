//! Uploaded file repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use haven_core::error::{AppError, ErrorKind};
use haven_core::result::AppResult;
use haven_entity::upload::UploadedFile;

/// Fields for inserting a new upload record.
#[derive(Debug, Clone)]
pub struct NewUploadedFile {
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
    /// Listing the image belongs to.
    pub listing_id: Option<Uuid>,
}

/// Repository for upload records.
#[derive(Debug, Clone)]
pub struct UploadRepository {
    pool: PgPool,
}

impl UploadRepository {
    /// Create a new upload repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an upload record by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UploadedFile>> {
        sqlx::query_as::<_, UploadedFile>("SELECT * FROM uploaded_files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find upload", e))
    }

    /// Insert a new upload record.
    pub async fn create(&self, new: &NewUploadedFile) -> AppResult<UploadedFile> {
        sqlx::query_as::<_, UploadedFile>(
            "INSERT INTO uploaded_files \
             (filename, url, size_bytes, mime_type, uploaded_by, listing_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&new.filename)
        .bind(&new.url)
        .bind(new.size_bytes)
        .bind(&new.mime_type)
        .bind(new.uploaded_by)
        .bind(new.listing_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create upload", e))
    }

    /// Delete an upload record. Returns `true` when a row matched.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM uploaded_files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete upload", e))?;
        Ok(result.rows_affected() > 0)
    }
}
