// Backend trait definitions

use async_trait::async_trait;

use crate::errors::{DownloadError, ResolveError};
use crate::models::{DownloadFormat, VideoInfo, VideoRef};

/// Metadata source behind the session.
///
/// Swapping the simulated implementation for a real client must not touch the
/// parsing or state-machine contracts.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Name of the provider (for logging)
    fn name(&self) -> &'static str;

    /// Resolve descriptive metadata for an extracted video reference
    async fn fetch_info(&self, video: &VideoRef) -> Result<VideoInfo, ResolveError>;
}

/// Asset preparation backend.
///
/// Produces a retrieval URL keyed by (id, format, request time); it never
/// performs the retrieval itself.
#[async_trait]
pub trait AssetPreparer: Send + Sync {
    /// Name of the preparer (for logging)
    fn name(&self) -> &'static str;

    /// Prepare an asset and return its retrieval URL
    async fn prepare_asset(
        &self,
        info: &VideoInfo,
        format: DownloadFormat,
    ) -> Result<String, DownloadError>;
}
