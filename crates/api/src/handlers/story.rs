//! Handlers for the `/stories` resource.

use axum::extract::State;
use axum::Json;
use companion_core::language::Language;
use companion_core::story::{fallback_stories, Story};
use companion_db::repositories::StoryRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoryQuery {
    pub language: Option<Language>,
}

#[derive(Debug, Serialize)]
pub struct StoryListResponse {
    pub messages: Vec<Story>,
    pub total: usize,
}

/// GET /api/v1/stories?language=it|en
///
/// Never fails on storage problems: an unreachable or empty store answers
/// with the built-in fallback stories, filtered the same way.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<StoryQuery>,
) -> AppResult<Json<StoryListResponse>> {
    let stored = match query.language {
        Some(language) => StoryRepo::list_by_language(&state.pool, language).await,
        None => StoryRepo::list(&state.pool).await,
    };

    let messages = match stored {
        Ok(stories) if !stories.is_empty() => stories,
        Ok(_) => {
            tracing::info!(language = ?query.language, "No stored stories, serving fallback");
            filtered_fallback(query.language)
        }
        Err(err) => {
            tracing::warn!(error = %err, "Story store unavailable, serving fallback");
            filtered_fallback(query.language)
        }
    };

    Ok(Json(StoryListResponse {
        total: messages.len(),
        messages,
    }))
}

fn filtered_fallback(language: Option<Language>) -> Vec<Story> {
    fallback_stories()
        .into_iter()
        .filter(|s| language.is_none_or(|l| s.language == l))
        .collect()
}
