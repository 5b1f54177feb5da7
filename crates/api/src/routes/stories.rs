//! Route definitions for stories and story submissions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{story, submission};
use crate::state::AppState;

/// ```text
/// GET    /stories         -> list
/// POST   /submit-story    -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stories", get(story::list))
        .route("/submit-story", post(submission::submit))
}
