//! Handlers for the `/photos` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use companion_core::error::CoreError;
use companion_core::ids::{generate_record_id, PHOTO_PREFIX};
use companion_core::story::Photo;
use companion_db::models::image::CreateImage;
use companion_db::repositories::PhotoRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::handlers::DeleteResponse;
use crate::state::AppState;
use crate::validation::{not_blank, validate_request};

#[derive(Debug, Deserialize, Validate)]
pub struct AddPhoto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Photo URL is required"))]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct PhotoListResponse {
    pub photos: Vec<Photo>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct PhotoCreatedResponse {
    pub success: bool,
    pub photo: Photo,
}

/// GET /api/v1/photos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<PhotoListResponse>> {
    let photos = PhotoRepo::list(&state.pool).await?;
    Ok(Json(PhotoListResponse {
        total: photos.len(),
        photos,
    }))
}

/// POST /api/v1/photos
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<AddPhoto>,
) -> AppResult<(StatusCode, Json<PhotoCreatedResponse>)> {
    validate_request(&input)?;

    let record = CreateImage {
        id: generate_record_id(PHOTO_PREFIX),
        url: input.url.trim().to_string(),
        created_at: Utc::now(),
    };
    let photo = PhotoRepo::create(&state.pool, &record).await?;
    tracing::info!(id = %photo.id, "Photo saved");

    Ok((
        StatusCode::CREATED,
        Json(PhotoCreatedResponse {
            success: true,
            photo,
        }),
    ))
}

/// DELETE /api/v1/photos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    if PhotoRepo::delete(&state.pool, &id).await? {
        tracing::info!(id = %id, "Photo deleted");
        Ok(Json(DeleteResponse::new("Photo deleted successfully")))
    } else {
        Err(CoreError::not_found("Photo", id).into())
    }
}
