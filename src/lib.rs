// tubefetch - YouTube URL parsing and download session core.
//
// The rendering layer is an external collaborator: it submits URLs and
// download requests through a Session and renders the returned view. The
// backends are simulated; a real client slots in behind the same traits.

pub mod backends;
pub mod errors;
pub mod models;
pub mod session;
pub mod traits;
pub mod urls;
pub mod utils;

pub use backends::{SimulatedBackend, SimulatedConfig};
pub use errors::{DownloadError, ResolveError, SubmitError, UrlError};
pub use models::{
    AssetRef, DownloadFormat, DownloadStatus, SessionView, ValidationError, VideoInfo, VideoRef,
};
pub use session::Session;
pub use traits::{AssetPreparer, MetadataProvider};
