//! `data:` URL encoding and decoding for image payloads.
//!
//! Browsers hand over canvas and camera output as
//! `data:image/jpeg;base64,<payload>`; the composite engine and the CDN
//! upload both work on these.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CoreError;

/// A decoded `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    /// Parse a base64 `data:` URL. Only base64 payloads are accepted.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let rest = input
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| CoreError::Validation("Expected a data: URL".into()))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| CoreError::Validation("Malformed data URL: missing ','".into()))?;

        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| CoreError::Validation("Data URL must be base64 encoded".into()))?;

        if mime_type.is_empty() {
            return Err(CoreError::Validation("Data URL has no media type".into()));
        }

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| CoreError::Validation(format!("Invalid base64 payload: {e}")))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            bytes,
        })
    }

    /// Whether the payload claims to be an image.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Encode bytes as a base64 `data:` URL.
pub fn encode(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_jpeg_data_url() {
        let url = encode("image/jpeg", &[0xff, 0xd8, 0xff]);
        let parsed = DataUrl::parse(&url).unwrap();
        assert_eq!(parsed.mime_type, "image/jpeg");
        assert_eq!(parsed.bytes, vec![0xff, 0xd8, 0xff]);
        assert!(parsed.is_image());
    }

    #[test]
    fn rejects_plain_urls() {
        assert_matches!(
            DataUrl::parse("https://example.com/a.jpg"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_non_base64_payloads() {
        assert_matches!(
            DataUrl::parse("data:text/plain,hello"),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            DataUrl::parse("data:image/png;base64,@@@"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn non_image_payload_is_flagged() {
        let parsed = DataUrl::parse(&encode("text/plain", b"hi")).unwrap();
        assert!(!parsed.is_image());
    }
}
