//! Upload record service.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use haven_core::result::AppResult;
use haven_core::traits::FileStore;
use haven_core::AppError;
use haven_database::repositories::upload::{NewUploadedFile, UploadRepository};
use haven_entity::upload::UploadedFile;
use haven_entity::user::UserRole;

use crate::context::RequestContext;

/// Input for registering an externally stored object.
#[derive(Debug, Clone)]
pub struct RegisterUpload {
    /// Stored filename.
    pub filename: String,
    /// Public URL of the stored object.
    pub url: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// MIME type.
    pub mime_type: String,
    /// Listing the image belongs to.
    pub listing_id: Option<Uuid>,
}

/// Manages uploaded-file records.
pub struct UploadService {
    uploads: Arc<UploadRepository>,
    files: Arc<dyn FileStore>,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(uploads: Arc<UploadRepository>, files: Arc<dyn FileStore>) -> Self {
        Self { uploads, files }
    }

    /// Register metadata for an object stored outside this service.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        input: RegisterUpload,
    ) -> AppResult<UploadedFile> {
        if !matches!(ctx.role, UserRole::Agent | UserRole::CompanyAdmin) {
            return Err(AppError::forbidden(
                "Only agents and company admins can register uploads",
            ));
        }
        if input.size_bytes <= 0 {
            return Err(AppError::validation("sizeBytes must be positive"));
        }

        let record = self
            .uploads
            .create(&NewUploadedFile {
                filename: input.filename,
                url: input.url,
                size_bytes: input.size_bytes,
                mime_type: input.mime_type,
                uploaded_by: ctx.user_id,
                listing_id: input.listing_id,
            })
            .await?;

        info!(upload_id = %record.id, user_id = %ctx.user_id, "Upload registered");
        Ok(record)
    }

    /// Delete an upload record.
    ///
    /// The database row is always removed; removal of the backing object is
    /// best-effort and a failure there is only logged.
    pub async fn delete(&self, ctx: &RequestContext, upload_id: Uuid) -> AppResult<()> {
        let record = self
            .uploads
            .find_by_id(upload_id)
            .await?
            .ok_or_else(|| AppError::not_found("Upload not found"))?;

        if record.uploaded_by != ctx.user_id && !ctx.is_platform_admin() {
            return Err(AppError::forbidden(
                "Only the uploader or an admin can delete this upload",
            ));
        }

        self.uploads.delete(upload_id).await?;
        info!(upload_id = %upload_id, user_id = %ctx.user_id, "Upload deleted");

        if let Err(e) = self.files.delete(&record.url).await {
            warn!(
                upload_id = %upload_id,
                url = %record.url,
                error = %e,
                "Failed to delete backing object"
            );
        }
        Ok(())
    }
}
