// Common data models for the session core

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical video identifier extracted from a submitted URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    /// Opaque identifier; never carries a variant-path fragment such as "shorts/"
    pub id: String,
    /// Whether the URL used the Shorts path variant
    pub is_short_form: bool,
}

/// Resolved video metadata, owned by the session for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    /// Formatted clock string ("m:ss" or "h:mm:ss")
    pub duration: String,
}

/// Output format selector for a download request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    Video,
    Audio,
}

impl DownloadFormat {
    /// File extension for the prepared asset
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Video => "mp4",
            Self::Audio => "mp3",
        }
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

/// Download lifecycle state exposed to the rendering collaborator.
///
/// Starts idle, moves to processing when a preparation is requested, and to
/// ready when the asset reference is produced. Preparation failure and every
/// new submission return it to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    #[default]
    Idle,
    Processing,
    Ready,
}

/// Prepared asset reference.
///
/// Turning this into an actual file retrieval is the caller's responsibility;
/// the core never performs the retrieval itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    pub url: String,
    pub suggested_filename: String,
}

/// User-visible error attached to the current submission only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
}

/// Read-only snapshot of session state for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub error: Option<ValidationError>,
    pub video: Option<VideoInfo>,
    pub status: DownloadStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_extension_matches_selector() {
        assert_eq!(DownloadFormat::Video.extension(), "mp4");
        assert_eq!(DownloadFormat::Audio.extension(), "mp3");
    }

    #[test]
    fn format_displays_lowercase() {
        assert_eq!(DownloadFormat::Video.to_string(), "video");
        assert_eq!(DownloadFormat::Audio.to_string(), "audio");
    }

    #[test]
    fn status_defaults_to_idle() {
        assert_eq!(DownloadStatus::default(), DownloadStatus::Idle);
    }
}
