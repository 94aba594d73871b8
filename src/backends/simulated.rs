// Simulated backend - stands in for a real metadata/asset service
//
// Latency and the duration draw are the only nondeterminism; everything else
// is a pure function of the video reference.

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use time::OffsetDateTime;

use crate::errors::{DownloadError, ResolveError};
use crate::models::{DownloadFormat, VideoInfo, VideoRef};
use crate::traits::{AssetPreparer, MetadataProvider};
use crate::utils::format_duration;

const SHORT_FORM_TITLE: &str = "Funny Cat Short - Daily Dose of Happiness";
const STANDARD_TITLE: &str = "How to Build a YouTube Downloader - Complete Tutorial";

/// Configuration for the simulated backend
#[derive(Debug, Clone)]
pub struct SimulatedConfig {
    /// Artificial metadata resolution latency
    pub resolve_latency: Duration,
    /// Artificial asset preparation latency
    pub prepare_latency: Duration,
    /// Base URL prepared assets point at
    pub download_host: String,
}

impl Default for SimulatedConfig {
    fn default() -> Self {
        Self {
            resolve_latency: Duration::from_millis(1500),
            prepare_latency: Duration::from_millis(2000),
            download_host: "https://example.com/api/download".to_string(),
        }
    }
}

impl SimulatedConfig {
    pub fn with_resolve_latency(mut self, latency: Duration) -> Self {
        self.resolve_latency = latency;
        self
    }

    pub fn with_prepare_latency(mut self, latency: Duration) -> Self {
        self.prepare_latency = latency;
        self
    }

    pub fn with_download_host(mut self, host: impl Into<String>) -> Self {
        self.download_host = host.into();
        self
    }

    /// Zero-latency configuration for tests
    pub fn instant() -> Self {
        Self::default()
            .with_resolve_latency(Duration::ZERO)
            .with_prepare_latency(Duration::ZERO)
    }
}

/// Backend that fabricates plausible metadata and asset URLs locally
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    config: SimulatedConfig,
}

impl SimulatedBackend {
    pub fn new(config: SimulatedConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl MetadataProvider for SimulatedBackend {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn fetch_info(&self, video: &VideoRef) -> Result<VideoInfo, ResolveError> {
        tokio::time::sleep(self.config.resolve_latency).await;

        // Shorts run well under a minute; regular uploads 2-20 minutes
        let duration_seconds = if video.is_short_form {
            rand::rng().random_range(15..60)
        } else {
            rand::rng().random_range(120..1320)
        };

        let title = if video.is_short_form {
            SHORT_FORM_TITLE
        } else {
            STANDARD_TITLE
        };

        Ok(VideoInfo {
            id: video.id.clone(),
            title: title.to_string(),
            thumbnail: format!("https://img.youtube.com/vi/{}/mqdefault.jpg", video.id),
            duration: format_duration(duration_seconds),
        })
    }
}

#[async_trait]
impl AssetPreparer for SimulatedBackend {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn prepare_asset(
        &self,
        info: &VideoInfo,
        format: DownloadFormat,
    ) -> Result<String, DownloadError> {
        tokio::time::sleep(self.config.prepare_latency).await;

        // Millisecond timestamp defeats caching between requests
        let now_ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        Ok(format!(
            "{}/{}?format={}&t={}",
            self.config.download_host, info.id, format, now_ms
        ))
    }
}
