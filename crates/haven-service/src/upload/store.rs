//! Backing object store implementations.

use async_trait::async_trait;
use tracing::debug;

use haven_core::result::AppResult;
use haven_core::traits::FileStore;

/// Leaves backing objects in place.
///
/// Used when object lifecycle is managed outside this service (CDN or
/// storage-side retention); the record delete still proceeds normally.
#[derive(Debug, Clone, Default)]
pub struct NoopFileStore;

#[async_trait]
impl FileStore for NoopFileStore {
    async fn delete(&self, url: &str) -> AppResult<()> {
        debug!(url = %url, "Object store disabled, leaving object in place");
        Ok(())
    }
}
