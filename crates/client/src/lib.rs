//! Client side of the companion site.
//!
//! Talks to the `/api/v1` data API, loads and caches the overlay asset, and
//! holds the per-view state (language, story deck, camera) that pages drive.

pub mod api;
pub mod config;
pub mod error;
pub mod gallery;
pub mod overlay;
pub mod response;
pub mod session;
pub mod stories;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, OverlayError};
pub use gallery::{DeleteOutcome, GalleryClient};
pub use overlay::OverlayCache;
pub use session::{AppContext, CameraSession, FacingMode, StorySession, VideoConstraints};
pub use stories::StoryClient;
