// Error types for the submission pipeline

use thiserror::Error;

use crate::models::DownloadFormat;

/// Synchronous URL rejection, raised before any backend call is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// Empty or whitespace-only input
    #[error("Please enter a YouTube URL")]
    EmptyInput,

    /// Input does not look like a YouTube URL at all
    #[error("Please enter a valid YouTube URL")]
    MalformedUrl,

    /// Passed the host check but no identifier pattern matched
    #[error("Invalid YouTube URL format")]
    UnsupportedShape,
}

/// Metadata resolution failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Video removed, private, or otherwise not resolvable
    #[error("Video {0} is unavailable")]
    Unavailable(String),
}

/// Asset preparation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// No metadata has been resolved in this session yet
    #[error("No video has been processed yet")]
    NothingResolved,

    /// A preparation is already in flight for this session
    #[error("A download is already being prepared")]
    AlreadyProcessing,

    /// The backend could not prepare the asset
    #[error("Failed to prepare {format} download: {reason}")]
    Preparation {
        format: DownloadFormat,
        reason: String,
    },

    /// The preparation finished after a newer submission took over
    #[error("Download superseded by a newer submission")]
    Superseded,
}

/// Submission pipeline failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Url(#[from] UrlError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The resolution finished after a newer submission took over
    #[error("Submission superseded by a newer one")]
    Superseded,
}
