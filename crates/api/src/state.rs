use std::sync::Arc;

use companion_cloud::cdn::ImageHost;
use companion_cloud::relay::StoryRelay;
use image::RgbaImage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Optional collaborators are `None` when their configuration is missing;
/// handlers that need them answer with a "not configured" error.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: companion_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Image CDN used by `/upload`.
    pub image_host: Option<Arc<dyn ImageHost>>,
    /// Outbound relay used by `/submit-story`.
    pub story_relay: Option<Arc<dyn StoryRelay>>,
    /// Decoded overlay asset used by `/composite`.
    pub overlay: Option<Arc<RgbaImage>>,
}
