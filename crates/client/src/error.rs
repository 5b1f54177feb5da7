use std::time::Duration;

use companion_core::capture::CaptureError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never got an answer (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The API answered 2xx but with an error payload.
    #[error("API reported an error: {0}")]
    Api(String),

    /// The body did not match any shape this client understands.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("Overlay {source_ref} did not load within {after:?}")]
    Timeout { source_ref: String, after: Duration },

    #[error("Overlay download failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Overlay download returned HTTP {0}")]
    Status(u16),

    #[error("Overlay file could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("Overlay could not be decoded: {0}")]
    Decode(#[from] CaptureError),
}
