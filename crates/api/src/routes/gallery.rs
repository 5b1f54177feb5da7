//! Route definitions for the `/gallery` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::gallery_image;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery_image::list).post(gallery_image::create))
        .route("/{id}", delete(gallery_image::delete))
}
