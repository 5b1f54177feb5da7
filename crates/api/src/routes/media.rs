//! Route definitions for image upload and compositing.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{composite, upload};
use crate::state::AppState;

/// ```text
/// GET    /upload       -> status
/// POST   /upload       -> upload
/// POST   /composite    -> composite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", get(upload::status).post(upload::upload))
        .route("/composite", post(composite::composite))
}
