//! Backing object store seam for uploaded files.

use async_trait::async_trait;

use crate::result::AppResult;

/// Removes stored objects referenced by uploaded-file records.
///
/// Deleting the database record always succeeds independently of this seam;
/// object removal is best-effort and failures are logged by the caller.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Delete the object behind the given public URL.
    async fn delete(&self, url: &str) -> AppResult<()>;
}
