//! Route definitions for the `/photos` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::photo;
use crate::state::AppState;

/// Routes mounted at `/photos`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(photo::list).post(photo::create))
        .route("/{id}", delete(photo::delete))
}
