//! Camera capture and overlay compositing.
//!
//! A capture takes one snapshot of the live camera at its native resolution,
//! draws the overlay asset (the companion's silhouette) on top of it so that
//! it lines up with where the overlay element sat on screen, and encodes the
//! result as a JPEG.
//!
//! On-screen geometry arrives as [`ScreenRect`]s in CSS pixels. The video
//! element is usually displayed smaller (or larger) than the camera's native
//! resolution, so every on-screen distance is multiplied by
//! `native_width / displayed_video_width` before drawing.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Pixel, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::data_url;

/// JPEG quality used for composited frames (0.9 on the canvas scale).
pub const JPEG_QUALITY: u8 = 90;

/// Overlay width in snapshot pixels when the overlay element was not measured.
pub const DEFAULT_OVERLAY_WIDTH: f64 = 500.0;

/// Horizontal anchor, as a share of the canvas width, used when bounding
/// boxes are unavailable. The overlay is centred on this line.
pub const FALLBACK_X_RATIO: f64 = 0.35;

/// Overlay sizes and offsets are bounded by this multiple of the larger
/// canvas side (or of [`DEFAULT_OVERLAY_WIDTH`] on small canvases).
pub const MAX_PLACEMENT_SPAN: f64 = 4.0;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("Overlay asset has no area ({width}x{height})")]
    EmptyOverlay { width: u32, height: u32 },

    #[error("Overlay placement is out of range for a {width}x{height} canvas")]
    PlacementOutOfRange { width: u32, height: u32 },
}

/// An on-screen bounding box in CSS pixels, as reported by the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Where the video and overlay elements were displayed at capture time.
///
/// Either box may be missing when the page could not measure it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureLayout {
    #[serde(default)]
    pub video: Option<ScreenRect>,
    #[serde(default)]
    pub overlay: Option<ScreenRect>,
}

/// Overlay rectangle in snapshot pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayPlacement {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Map the on-screen overlay box into snapshot pixel space.
///
/// `canvas` is the snapshot's native `(width, height)`, `intrinsic` the
/// overlay asset's own `(width, height)`.
pub fn place_overlay(
    canvas: (u32, u32),
    intrinsic: (u32, u32),
    layout: &CaptureLayout,
) -> Result<OverlayPlacement, CaptureError> {
    let (canvas_w, canvas_h) = (f64::from(canvas.0), f64::from(canvas.1));
    if intrinsic.0 == 0 || intrinsic.1 == 0 {
        return Err(CaptureError::EmptyOverlay {
            width: intrinsic.0,
            height: intrinsic.1,
        });
    }

    let scale = match layout.video {
        Some(video) if video.width > 0.0 => canvas_w / video.width,
        _ => 1.0,
    };

    let overlay_w = match layout.overlay {
        Some(overlay) if overlay.width > 0.0 => overlay.width * scale,
        _ => DEFAULT_OVERLAY_WIDTH,
    };
    let overlay_h = overlay_w * f64::from(intrinsic.1) / f64::from(intrinsic.0);

    let x = match (layout.overlay, layout.video) {
        (Some(overlay), Some(video)) => (overlay.left - video.left) * scale,
        _ => canvas_w * FALLBACK_X_RATIO - overlay_w / 2.0,
    };
    let y = canvas_h - overlay_h;

    let limit = canvas_w.max(canvas_h).max(DEFAULT_OVERLAY_WIDTH) * MAX_PLACEMENT_SPAN;
    let in_range = |v: f64| v.is_finite() && v.abs() <= limit;
    if ![overlay_w, overlay_h, x, y].into_iter().all(in_range) {
        return Err(CaptureError::PlacementOutOfRange {
            width: canvas.0,
            height: canvas.1,
        });
    }

    Ok(OverlayPlacement {
        x: x.round() as i64,
        y: y.round() as i64,
        width: (overlay_w.round() as u32).max(1),
        height: (overlay_h.round() as u32).max(1),
    })
}

/// Draw `overlay` onto a copy of `snapshot`. The result always has the
/// snapshot's native dimensions.
///
/// Shrinking resizes the whole asset, so it never allocates more than the
/// asset itself. Enlarging samples the asset only under the visible canvas
/// pixels.
pub fn composite(
    snapshot: &RgbaImage,
    overlay: &RgbaImage,
    layout: &CaptureLayout,
) -> Result<RgbaImage, CaptureError> {
    let placement = place_overlay(snapshot.dimensions(), overlay.dimensions(), layout)?;

    let mut canvas = snapshot.clone();
    let (intrinsic_w, intrinsic_h) = overlay.dimensions();
    if placement.width <= intrinsic_w && placement.height <= intrinsic_h {
        let scaled = imageops::resize(
            overlay,
            placement.width,
            placement.height,
            FilterType::Triangle,
        );
        imageops::overlay(&mut canvas, &scaled, placement.x, placement.y);
    } else {
        draw_enlarged(&mut canvas, overlay, &placement);
    }
    Ok(canvas)
}

/// Bilinear upscale of `overlay` into `placement`, clipped to the canvas.
fn draw_enlarged(canvas: &mut RgbaImage, overlay: &RgbaImage, placement: &OverlayPlacement) {
    let (canvas_w, canvas_h) = canvas.dimensions();
    let clip = |start: i64, len: u32, bound: u32| {
        let lo = start.clamp(0, i64::from(bound));
        let hi = (start + i64::from(len)).clamp(0, i64::from(bound));
        lo..hi
    };
    let cols = clip(placement.x, placement.width, canvas_w);
    let rows = clip(placement.y, placement.height, canvas_h);

    let (w, h) = (placement.width as f32, placement.height as f32);
    for cy in rows {
        let v = ((cy - placement.y) as f32 + 0.5) / h;
        for cx in cols.clone() {
            let u = ((cx - placement.x) as f32 + 0.5) / w;
            if let Some(px) = imageops::sample_bilinear(overlay, u, v) {
                canvas.get_pixel_mut(cx as u32, cy as u32).blend(&px);
            }
        }
    }
}

/// Encode an RGBA canvas as JPEG. Alpha is dropped.
pub fn encode_jpeg(canvas: &RgbaImage, quality: u8) -> Result<Vec<u8>, CaptureError> {
    let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
    let mut bytes = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, quality))?;
    Ok(bytes)
}

/// Decode any supported image (PNG, JPEG, WebP) into RGBA.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, CaptureError> {
    let decoded = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .decode()?;
    Ok(decoded.to_rgba8())
}

/// Anything that can produce a still of the live camera.
pub trait FrameSource {
    /// Grab one frame at native resolution, or `None` if the device is not
    /// ready yet.
    fn snapshot(&mut self) -> Option<RgbaImage>;
}

/// A finished capture: the raw snapshot and the composited JPEG.
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    pub raw: RgbaImage,
    pub composited: RgbaImage,
    pub jpeg: Vec<u8>,
}

impl CapturedFrame {
    /// The composited JPEG as a `data:image/jpeg;base64,…` URL.
    pub fn data_url(&self) -> String {
        data_url::encode("image/jpeg", &self.jpeg)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.composited.dimensions()
    }
}

/// Snapshot `source` and composite `overlay` on top.
///
/// Returns `Ok(None)` when the source has no frame to give.
pub fn capture<S: FrameSource + ?Sized>(
    source: &mut S,
    overlay: &RgbaImage,
    layout: &CaptureLayout,
) -> Result<Option<CapturedFrame>, CaptureError> {
    let Some(raw) = source.snapshot() else {
        return Ok(None);
    };

    let composited = composite(&raw, overlay, layout)?;
    let jpeg = encode_jpeg(&composited, JPEG_QUALITY)?;
    Ok(Some(CapturedFrame {
        raw,
        composited,
        jpeg,
    }))
}

/// Camera widget state: showing the live feed, or holding a capture.
#[derive(Debug, Clone, Default)]
pub enum CaptureState {
    #[default]
    Live,
    Captured(CapturedFrame),
}

impl CaptureState {
    pub fn is_captured(&self) -> bool {
        matches!(self, CaptureState::Captured(_))
    }

    pub fn frame(&self) -> Option<&CapturedFrame> {
        match self {
            CaptureState::Live => None,
            CaptureState::Captured(frame) => Some(frame),
        }
    }

    /// Take a capture. A source without a frame leaves the state untouched.
    pub fn capture<S: FrameSource + ?Sized>(
        &mut self,
        source: &mut S,
        overlay: &RgbaImage,
        layout: &CaptureLayout,
    ) -> Result<bool, CaptureError> {
        match capture(source, overlay, layout)? {
            Some(frame) => {
                *self = CaptureState::Captured(frame);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Discard the capture and go back to the live feed.
    pub fn retake(&mut self) {
        *self = CaptureState::Live;
    }
}
