//! Handler for `/submit-story`.

use axum::extract::State;
use axum::Json;
use companion_cloud::relay::StorySubmission;
use companion_core::language::Language;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;
use crate::validation::{not_blank, validate_request};

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitStoryRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Story content is required"))]
    pub message: String,
    /// Defaults to English, the UI's default language.
    pub language: Option<Language>,
}

#[derive(Debug, Serialize)]
pub struct SubmitStoryResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/v1/submit-story
///
/// Forwards the story once; nothing is stored.
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<SubmitStoryRequest>,
) -> AppResult<Json<SubmitStoryResponse>> {
    validate_request(&input)?;

    let relay = state
        .story_relay
        .as_ref()
        .ok_or(AppError::NotConfigured("Story submissions"))?;

    let submission = StorySubmission {
        message: input.message.trim().to_string(),
        language: input.language.unwrap_or(Language::UI_DEFAULT),
    };
    relay.submit(&submission).await?;

    Ok(Json(SubmitStoryResponse {
        success: true,
        message: "Story submitted successfully",
    }))
}
