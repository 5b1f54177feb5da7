pub mod gallery;
pub mod health;
pub mod media;
pub mod photos;
pub mod stories;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /stories                 list (?language=it|en)
/// /submit-story            relay a visitor's story (POST)
///
/// /gallery                 list, create
/// /gallery/{id}            delete
///
/// /photos                  list, create
/// /photos/{id}             delete
///
/// /upload                  liveness (GET), CDN upload (POST)
/// /composite               overlay compositing (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(stories::router())
        .nest("/gallery", gallery::router())
        .nest("/photos", photos::router())
        .merge(media::router())
}
