//! Handlers for `/upload`: hosting captured images on the CDN.

use axum::extract::State;
use axum::Json;
use companion_core::data_url::DataUrl;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;
use crate::validation::{not_blank, validate_request};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Image as a base64 `data:` URL.
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Image data is required"))]
    pub image_data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub public_id: String,
}

#[derive(Debug, Serialize)]
pub struct UploadStatus {
    pub message: &'static str,
}

/// GET /api/v1/upload
pub async fn status() -> Json<UploadStatus> {
    Json(UploadStatus {
        message: "Upload API is working",
    })
}

/// POST /api/v1/upload
///
/// The payload is checked locally before anything is sent to the CDN.
pub async fn upload(
    State(state): State<AppState>,
    AppJson(input): AppJson<UploadRequest>,
) -> AppResult<Json<UploadResponse>> {
    validate_request(&input)?;

    let parsed = DataUrl::parse(&input.image_data)?;
    if !parsed.is_image() {
        return Err(AppError::BadRequest("Image data must be an image".to_string()));
    }

    let host = state
        .image_host
        .as_ref()
        .ok_or(AppError::NotConfigured("Image uploads"))?;

    let uploaded = host.upload(input.image_data.trim()).await?;

    Ok(Json(UploadResponse {
        success: true,
        url: uploaded.url,
        public_id: uploaded.public_id,
    }))
}
