//! Image CDN upload.
//!
//! [`CloudinaryHost`] performs a signed upload of a base64 `data:` URL and
//! returns the persistent HTTPS URL plus the CDN's public id. Requests are
//! signed with SHA-1, the Cloudinary default; accounts switched to SHA-256
//! signatures set `CLOUDINARY_SIGNATURE_ALGORITHM=sha256`.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use companion_core::hashing::{sha1_hex, sha256_hex};
use serde::{Deserialize, Serialize};

/// Default Cloudinary API origin.
const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";

/// Default folder uploads are filed under.
const DEFAULT_FOLDER: &str = "ciao-claudia/gallery";

/// HTTP timeout for a single upload.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CdnError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The CDN answered with a non-2xx status.
    #[error("CDN error ({status}): {message}")]
    Api { status: u16, message: String },
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    /// Persistent HTTPS URL of the hosted image.
    pub url: String,
    /// Opaque CDN identifier.
    pub public_id: String,
}

/// Something that can host an image and hand back a URL for it.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload an image given as a base64 `data:` URL.
    async fn upload(&self, data_url: &str) -> Result<UploadedImage, CdnError>;
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Digest the account verifies request signatures with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    fn hex_digest(self, data: &[u8]) -> String {
        match self {
            SignatureAlgorithm::Sha1 => sha1_hex(data),
            SignatureAlgorithm::Sha256 => sha256_hex(data),
        }
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" => Ok(SignatureAlgorithm::Sha1),
            "sha256" => Ok(SignatureAlgorithm::Sha256),
            other => Err(format!("unknown signature algorithm '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
    pub signature_algorithm: SignatureAlgorithm,
    /// API origin; only overridden in tests.
    pub api_base: String,
}

impl CloudinaryConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` unless all three credentials are set, which disables
    /// uploads.
    ///
    /// | Variable                          | Required | Default                 |
    /// |-----------------------------------|----------|-------------------------|
    /// | `CLOUDINARY_CLOUD_NAME`           | yes      | none                    |
    /// | `CLOUDINARY_API_KEY`              | yes      | none                    |
    /// | `CLOUDINARY_API_SECRET`           | yes      | none                    |
    /// | `CLOUDINARY_FOLDER`               | no       | `ciao-claudia/gallery`  |
    /// | `CLOUDINARY_SIGNATURE_ALGORITHM`  | no       | `sha1`                  |
    ///
    /// # Panics
    ///
    /// Panics if `CLOUDINARY_SIGNATURE_ALGORITHM` is neither `sha1` nor
    /// `sha256`.
    pub fn from_env() -> Option<Self> {
        let signature_algorithm = match non_empty_var("CLOUDINARY_SIGNATURE_ALGORITHM") {
            Some(raw) => raw
                .parse()
                .unwrap_or_else(|e| panic!("CLOUDINARY_SIGNATURE_ALGORITHM: {e}")),
            None => SignatureAlgorithm::default(),
        };

        Some(Self {
            cloud_name: non_empty_var("CLOUDINARY_CLOUD_NAME")?,
            api_key: non_empty_var("CLOUDINARY_API_KEY")?,
            api_secret: non_empty_var("CLOUDINARY_API_SECRET")?,
            folder: std::env::var("CLOUDINARY_FOLDER")
                .unwrap_or_else(|_| DEFAULT_FOLDER.to_string()),
            signature_algorithm,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    fn upload_url(&self) -> String {
        format!("{}/v1_1/{}/image/upload", self.api_base, self.cloud_name)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Compute a Cloudinary request signature.
///
/// Parameters are sorted by name, joined as `k=v` with `&`, the secret is
/// appended, and the result is hashed.
pub fn sign_params(
    params: &[(&str, &str)],
    api_secret: &str,
    algorithm: SignatureAlgorithm,
) -> String {
    let mut sorted: Vec<_> = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    algorithm.hex_digest(format!("{joined}{api_secret}").as_bytes())
}

// ---------------------------------------------------------------------------
// Cloudinary
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Signed uploads to a Cloudinary account.
pub struct CloudinaryHost {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryHost {
    pub fn new(config: CloudinaryConfig) -> Result<Self, CdnError> {
        let client = reqwest::Client::builder().timeout(UPLOAD_TIMEOUT).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ImageHost for CloudinaryHost {
    async fn upload(&self, data_url: &str) -> Result<UploadedImage, CdnError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign_params(
            &[
                ("folder", self.config.folder.as_str()),
                ("timestamp", timestamp.as_str()),
            ],
            &self.config.api_secret,
            self.config.signature_algorithm,
        );

        let form = reqwest::multipart::Form::new()
            .text("file", data_url.to_string())
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", self.config.folder.clone())
            .text("signature", signature);

        let response = self
            .client
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CdnError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let uploaded: UploadResponse = response.json().await?;
        tracing::info!(public_id = %uploaded.public_id, "Image uploaded to CDN");

        Ok(UploadedImage {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
