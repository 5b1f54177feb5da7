//! Handlers for the `/gallery` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use companion_core::error::CoreError;
use companion_core::ids::{generate_record_id, GALLERY_PREFIX};
use companion_core::story::GalleryImage;
use companion_db::models::image::CreateImage;
use companion_db::repositories::GalleryImageRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::handlers::DeleteResponse;
use crate::state::AppState;
use crate::validation::{not_blank, validate_request};

#[derive(Debug, Deserialize, Validate)]
pub struct AddGalleryImage {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Image URL is required"))]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct GalleryListResponse {
    pub images: Vec<GalleryImage>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct GalleryCreatedResponse {
    pub success: bool,
    pub image: GalleryImage,
}

/// GET /api/v1/gallery
///
/// Newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<GalleryListResponse>> {
    let images = GalleryImageRepo::list(&state.pool).await?;
    Ok(Json(GalleryListResponse {
        total: images.len(),
        images,
    }))
}

/// POST /api/v1/gallery
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<AddGalleryImage>,
) -> AppResult<(StatusCode, Json<GalleryCreatedResponse>)> {
    validate_request(&input)?;

    let record = CreateImage {
        id: generate_record_id(GALLERY_PREFIX),
        url: input.url.trim().to_string(),
        created_at: Utc::now(),
    };
    let image = GalleryImageRepo::create(&state.pool, &record).await?;
    tracing::info!(id = %image.id, "Gallery image added");

    Ok((
        StatusCode::CREATED,
        Json(GalleryCreatedResponse {
            success: true,
            image,
        }),
    ))
}

/// DELETE /api/v1/gallery/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    if GalleryImageRepo::delete(&state.pool, &id).await? {
        tracing::info!(id = %id, "Gallery image deleted");
        Ok(Json(DeleteResponse::new("Image deleted successfully")))
    } else {
        Err(CoreError::not_found("GalleryImage", id).into())
    }
}
