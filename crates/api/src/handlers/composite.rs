//! Handler for server-side overlay compositing.
//!
//! Clients that cannot draw on a canvas send the raw snapshot plus the
//! on-screen layout; the server draws its overlay asset with the same
//! placement rules the camera widget uses.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use companion_core::capture::{self, CaptureError, CaptureLayout, CapturedFrame, FrameSource};
use companion_core::data_url::DataUrl;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompositeRequest {
    /// Raw snapshot as a base64 `data:` URL.
    pub frame: String,
    #[serde(default)]
    pub layout: CaptureLayout,
}

#[derive(Debug, Serialize)]
pub struct CompositeResponse {
    pub success: bool,
    /// Composited JPEG as a `data:` URL.
    pub image: String,
    pub width: u32,
    pub height: u32,
}

/// A snapshot that was uploaded rather than taken from a live device.
struct UploadedFrame(Option<RgbaImage>);

impl FrameSource for UploadedFrame {
    fn snapshot(&mut self) -> Option<RgbaImage> {
        self.0.take()
    }
}

/// POST /api/v1/composite
pub async fn composite(
    State(state): State<AppState>,
    AppJson(input): AppJson<CompositeRequest>,
) -> AppResult<Json<CompositeResponse>> {
    let overlay = state
        .overlay
        .clone()
        .ok_or(AppError::NotConfigured("Overlay asset"))?;

    let frame = DataUrl::parse(&input.frame)?;
    if !frame.is_image() {
        return Err(AppError::BadRequest("Frame must be an image".to_string()));
    }

    let layout = input.layout;
    let captured = tokio::task::spawn_blocking(move || render(&frame.bytes, &overlay, &layout))
        .await
        .map_err(|e| AppError::InternalError(format!("Composite task failed: {e}")))??;

    let (width, height) = captured.dimensions();
    tracing::debug!(width, height, bytes = captured.jpeg.len(), "Frame composited");

    Ok(Json(CompositeResponse {
        success: true,
        image: captured.data_url(),
        width,
        height,
    }))
}

fn render(
    frame: &[u8],
    overlay: &Arc<RgbaImage>,
    layout: &CaptureLayout,
) -> Result<CapturedFrame, AppError> {
    let snapshot = capture::decode_rgba(frame)
        .map_err(|e| AppError::BadRequest(format!("Frame could not be decoded: {e}")))?;

    let mut source = UploadedFrame(Some(snapshot));
    capture::capture(&mut source, overlay, layout)
        .map_err(|e| match e {
            CaptureError::PlacementOutOfRange { .. } => AppError::BadRequest(e.to_string()),
            other => AppError::InternalError(format!("Compositing failed: {other}")),
        })?
        .ok_or_else(|| AppError::InternalError("Uploaded frame was already consumed".to_string()))
}
