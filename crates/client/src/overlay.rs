//! Overlay asset loading.
//!
//! The overlay is fetched and decoded once per source and kept for the rest
//! of the session. A load that does not finish within the configured timeout
//! fails with [`OverlayError::Timeout`] and is not cached, so the next
//! capture tries again.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use companion_core::capture::decode_rgba;
use image::RgbaImage;
use tokio::sync::RwLock;

use crate::error::OverlayError;

pub struct OverlayCache {
    http: reqwest::Client,
    timeout: Duration,
    entries: RwLock<HashMap<String, Arc<RgbaImage>>>,
}

impl OverlayCache {
    pub fn new(timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            timeout,
            entries: RwLock::default(),
        }
    }

    /// Get the decoded overlay at `source`, an `http(s)://` URL or a file path.
    pub async fn get(&self, source: &str) -> Result<Arc<RgbaImage>, OverlayError> {
        if let Some(hit) = self.entries.read().await.get(source) {
            return Ok(Arc::clone(hit));
        }

        let image = tokio::time::timeout(self.timeout, self.load(source))
            .await
            .map_err(|_| OverlayError::Timeout {
                source_ref: source.to_string(),
                after: self.timeout,
            })??;

        let mut entries = self.entries.write().await;
        let cached = entries
            .entry(source.to_string())
            .or_insert_with(|| Arc::new(image));
        tracing::debug!(
            source,
            width = cached.width(),
            height = cached.height(),
            "Overlay cached"
        );
        Ok(Arc::clone(cached))
    }

    /// Whether `source` has already been loaded.
    pub async fn contains(&self, source: &str) -> bool {
        self.entries.read().await.contains_key(source)
    }

    async fn load(&self, source: &str) -> Result<RgbaImage, OverlayError> {
        let bytes = if source.starts_with("http://") || source.starts_with("https://") {
            let response = self.http.get(source).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(OverlayError::Status(status.as_u16()));
            }
            response.bytes().await?.to_vec()
        } else {
            tokio::fs::read(source).await?
        };

        let image = tokio::task::spawn_blocking(move || decode_rgba(&bytes))
            .await
            .map_err(|e| OverlayError::Io(std::io::Error::other(e)))??;
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;
    use axum::routing::get;
    use axum::Router;
    use image::{DynamicImage, ImageFormat, Rgba};

    use super::*;

    fn png_bytes() -> Vec<u8> {
        let img = RgbaImage::from_pixel(4, 8, Rgba([0, 0, 255, 128]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn overlay_is_fetched_once() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let base = serve(Router::new().route(
            "/overlay.png",
            get(move || {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    png_bytes()
                }
            }),
        ))
        .await;
        let url = format!("{base}/overlay.png");
        let cache = OverlayCache::new(Duration::from_secs(5));

        let first = cache.get(&url).await.unwrap();
        let second = cache.get(&url).await.unwrap();

        assert_eq!(first.dimensions(), (4, 8));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn slow_overlay_times_out_and_is_not_cached() {
        let base = serve(Router::new().route(
            "/slow.png",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                png_bytes()
            }),
        ))
        .await;
        let url = format!("{base}/slow.png");
        let cache = OverlayCache::new(Duration::from_millis(100));

        let err = cache.get(&url).await.unwrap_err();

        assert_matches!(err, OverlayError::Timeout { ref source_ref, .. } if *source_ref == url);
        assert!(!cache.contains(&url).await);
    }

    #[tokio::test]
    async fn missing_overlay_is_a_status_error() {
        let base = serve(Router::new()).await;
        let cache = OverlayCache::new(Duration::from_secs(5));

        let err = cache.get(&format!("{base}/nope.png")).await.unwrap_err();
        assert_matches!(err, OverlayError::Status(404));
    }

    #[tokio::test]
    async fn garbage_bytes_fail_to_decode() {
        let base = serve(Router::new().route("/bad.png", get(|| async { "not an image" }))).await;
        let cache = OverlayCache::new(Duration::from_secs(5));

        let err = cache.get(&format!("{base}/bad.png")).await.unwrap_err();
        assert_matches!(err, OverlayError::Decode(_));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let cache = OverlayCache::new(Duration::from_secs(5));
        let err = cache.get("/definitely/not/here.png").await.unwrap_err();
        assert_matches!(err, OverlayError::Io(_));
    }
}
