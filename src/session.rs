// Session state machine - one submission at a time, stale results discarded

use std::sync::{Arc, Mutex, MutexGuard};

use crate::backends::{SimulatedBackend, SimulatedConfig};
use crate::errors::{DownloadError, SubmitError, UrlError};
use crate::models::{
    AssetRef, DownloadFormat, DownloadStatus, SessionView, ValidationError, VideoInfo,
};
use crate::traits::{AssetPreparer, MetadataProvider};
use crate::urls;
use crate::utils;

/// Mutable state owned by the current submission
#[derive(Debug, Default)]
struct SessionState {
    /// Monotonic token; a backend result applies only while its token is current
    submission: u64,
    video: Option<VideoInfo>,
    status: DownloadStatus,
    error: Option<ValidationError>,
}

impl SessionState {
    /// Start a fresh submission: bump the token and clear per-submission state
    fn begin_submission(&mut self) -> u64 {
        self.submission += 1;
        self.video = None;
        self.status = DownloadStatus::Idle;
        self.error = None;
        self.submission
    }
}

/// One user session: submit URLs, resolve metadata, request downloads.
///
/// The rendering collaborator only reads, through [`Session::view`]; writes
/// happen here and in no other place. The state mutex is never held across
/// an await.
pub struct Session {
    provider: Arc<dyn MetadataProvider>,
    preparer: Arc<dyn AssetPreparer>,
    state: Mutex<SessionState>,
}

impl Session {
    pub fn new(provider: Arc<dyn MetadataProvider>, preparer: Arc<dyn AssetPreparer>) -> Self {
        Self {
            provider,
            preparer,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Session backed by the built-in simulated backend
    pub fn simulated(config: SimulatedConfig) -> Self {
        let backend = Arc::new(SimulatedBackend::new(config));
        Self::new(backend.clone(), backend)
    }

    /// Validate, extract, and resolve one submitted URL.
    ///
    /// Any previous submission is invalidated first. Validation errors
    /// short-circuit before the backend is called; if a newer submission
    /// arrives while this one is resolving, the stale result is discarded
    /// without touching the newer state.
    pub async fn submit(&self, raw: &str) -> Result<VideoInfo, SubmitError> {
        let token = self.lock().begin_submission();

        if raw.trim().is_empty() {
            return Err(self.reject(token, UrlError::EmptyInput));
        }
        if !urls::is_valid_url(raw) {
            return Err(self.reject(token, UrlError::MalformedUrl));
        }
        let video_ref = match urls::extract_video_ref(raw) {
            Some(video_ref) => video_ref,
            None => return Err(self.reject(token, UrlError::UnsupportedShape)),
        };

        tracing::debug!(
            id = %video_ref.id,
            short_form = video_ref.is_short_form,
            provider = self.provider.name(),
            "resolving metadata"
        );

        match self.provider.fetch_info(&video_ref).await {
            Ok(info) => {
                let mut state = self.lock();
                if state.submission != token {
                    tracing::debug!(id = %video_ref.id, "discarding stale metadata result");
                    return Err(SubmitError::Superseded);
                }
                state.video = Some(info.clone());
                Ok(info)
            }
            Err(e) => {
                tracing::warn!(id = %video_ref.id, error = %e, "metadata resolution failed");
                let mut state = self.lock();
                if state.submission == token {
                    state.error = Some(ValidationError {
                        message: e.to_string(),
                    });
                }
                Err(e.into())
            }
        }
    }

    /// Request asset preparation for the resolved video.
    ///
    /// Rejected while another preparation is in flight. On failure the
    /// session returns to idle and keeps the metadata so the user can retry.
    pub async fn request_download(
        &self,
        format: DownloadFormat,
    ) -> Result<AssetRef, DownloadError> {
        let (token, info) = {
            let mut state = self.lock();
            let info = match &state.video {
                Some(info) => info.clone(),
                None => return Err(DownloadError::NothingResolved),
            };
            if state.status == DownloadStatus::Processing {
                return Err(DownloadError::AlreadyProcessing);
            }
            state.status = DownloadStatus::Processing;
            (state.submission, info)
        };

        tracing::debug!(
            id = %info.id,
            %format,
            preparer = self.preparer.name(),
            "preparing asset"
        );

        match self.preparer.prepare_asset(&info, format).await {
            Ok(url) => {
                let mut state = self.lock();
                if state.submission != token {
                    tracing::debug!(id = %info.id, "discarding stale asset result");
                    return Err(DownloadError::Superseded);
                }
                state.status = DownloadStatus::Ready;
                Ok(AssetRef {
                    url,
                    suggested_filename: utils::suggested_filename(&info.title, format),
                })
            }
            Err(e) => {
                tracing::warn!(id = %info.id, error = %e, "asset preparation failed");
                let mut state = self.lock();
                if state.submission == token {
                    state.status = DownloadStatus::Idle;
                    state.error = Some(ValidationError {
                        message: e.to_string(),
                    });
                }
                Err(e)
            }
        }
    }

    /// Current download lifecycle state
    pub fn status(&self) -> DownloadStatus {
        self.lock().status
    }

    /// Snapshot of everything the rendering collaborator needs
    pub fn view(&self) -> SessionView {
        let state = self.lock();
        SessionView {
            error: state.error.clone(),
            video: state.video.clone(),
            status: state.status,
        }
    }

    fn reject(&self, token: u64, error: UrlError) -> SubmitError {
        let mut state = self.lock();
        if state.submission == token {
            state.error = Some(ValidationError {
                message: error.to_string(),
            });
        }
        error.into()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::simulated(SimulatedConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_token_is_monotonic_and_resets_state() {
        let mut state = SessionState::default();
        let first = state.begin_submission();
        state.video = Some(VideoInfo {
            id: "dQw4w9WgXcQ".to_string(),
            title: "t".to_string(),
            thumbnail: String::new(),
            duration: "0:30".to_string(),
        });
        state.status = DownloadStatus::Ready;
        state.error = Some(ValidationError {
            message: "old".to_string(),
        });

        let second = state.begin_submission();
        assert!(second > first);
        assert!(state.video.is_none());
        assert_eq!(state.status, DownloadStatus::Idle);
        assert!(state.error.is_none());
    }
}
