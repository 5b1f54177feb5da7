//! Gallery and photo persistence through the data API.

use companion_core::capture::{CaptureLayout, CapturedFrame};
use companion_core::story::{GalleryImage, Photo};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::{status_error, ApiClient};
use crate::error::ClientError;

/// Result of deleting a record by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// An image hosted on the CDN.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedImage {
    pub url: String,
    pub public_id: String,
}

/// A frame composited by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteComposite {
    /// JPEG `data:` URL.
    pub image: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Serialize)]
struct UrlBody<'a> {
    url: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadBody<'a> {
    image_data: &'a str,
}

#[derive(Debug, Serialize)]
struct CompositeBody<'a> {
    frame: &'a str,
    layout: &'a CaptureLayout,
}

#[derive(Debug, Deserialize)]
struct ImageList {
    images: Vec<GalleryImage>,
}

#[derive(Debug, Deserialize)]
struct PhotoList {
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct ImageCreated {
    image: GalleryImage,
}

#[derive(Debug, Deserialize)]
struct PhotoCreated {
    photo: Photo,
}

#[derive(Debug, Clone)]
pub struct GalleryClient {
    api: ApiClient,
}

impl GalleryClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Gallery images, newest first.
    pub async fn list_images(&self) -> Result<Vec<GalleryImage>, ClientError> {
        let list: ImageList = self.api.get_json("/gallery").await?;
        Ok(list.images)
    }

    /// Upload a captured frame to the CDN, then record it in the gallery.
    pub async fn add_image(&self, frame: &CapturedFrame) -> Result<GalleryImage, ClientError> {
        let hosted = self.upload(&frame.data_url()).await?;
        self.add_image_url(&hosted.url).await
    }

    /// Record an already hosted image in the gallery.
    pub async fn add_image_url(&self, url: &str) -> Result<GalleryImage, ClientError> {
        let created: ImageCreated = self.api.post_json("/gallery", &UrlBody { url }).await?;
        tracing::debug!(id = %created.image.id, "Gallery image recorded");
        Ok(created.image)
    }

    pub async fn delete_image(&self, id: &str) -> Result<DeleteOutcome, ClientError> {
        self.delete(&format!("/gallery/{id}")).await
    }

    /// Photos, newest first.
    pub async fn list_photos(&self) -> Result<Vec<Photo>, ClientError> {
        let list: PhotoList = self.api.get_json("/photos").await?;
        Ok(list.photos)
    }

    /// Upload a captured frame to the CDN, then record it as a photo.
    pub async fn save_photo(&self, frame: &CapturedFrame) -> Result<Photo, ClientError> {
        let hosted = self.upload(&frame.data_url()).await?;
        let created: PhotoCreated = self
            .api
            .post_json("/photos", &UrlBody { url: &hosted.url })
            .await?;
        Ok(created.photo)
    }

    pub async fn delete_photo(&self, id: &str) -> Result<DeleteOutcome, ClientError> {
        self.delete(&format!("/photos/{id}")).await
    }

    /// Host an image given as a `data:` URL.
    pub async fn upload(&self, data_url: &str) -> Result<HostedImage, ClientError> {
        self.api
            .post_json("/upload", &UploadBody { image_data: data_url })
            .await
    }

    /// Composite a raw snapshot with the server's overlay asset.
    pub async fn composite_remote(
        &self,
        frame_data_url: &str,
        layout: &CaptureLayout,
    ) -> Result<RemoteComposite, ClientError> {
        self.api
            .post_json(
                "/composite",
                &CompositeBody {
                    frame: frame_data_url,
                    layout,
                },
            )
            .await
    }

    async fn delete(&self, path: &str) -> Result<DeleteOutcome, ClientError> {
        let response = self.api.delete_raw(path).await?;
        match response.status() {
            status if status.is_success() => Ok(DeleteOutcome::Deleted),
            StatusCode::NOT_FOUND => Ok(DeleteOutcome::NotFound),
            status => Err(status_error(status, response).await),
        }
    }
}
