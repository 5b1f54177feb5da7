use std::time::Duration;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the data API, including the `/api/v1` prefix.
    pub base_url: String,
    /// Timeout for a single API request.
    pub request_timeout: Duration,
    /// Timeout for fetching and decoding the overlay asset.
    pub overlay_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api/v1".to_string(),
            request_timeout: Duration::from_secs(10),
            overlay_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                         |
    /// |------------------------------|---------------------------------|
    /// | `COMPANION_API_URL`          | `http://localhost:3000/api/v1`  |
    /// | `COMPANION_REQUEST_TIMEOUT`  | `10` (seconds)                  |
    /// | `COMPANION_OVERLAY_TIMEOUT`  | `10` (seconds)                  |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("COMPANION_API_URL").unwrap_or(defaults.base_url),
            request_timeout: secs_var("COMPANION_REQUEST_TIMEOUT")
                .unwrap_or(defaults.request_timeout),
            overlay_timeout: secs_var("COMPANION_OVERLAY_TIMEOUT")
                .unwrap_or(defaults.overlay_timeout),
        }
    }

    /// Build the absolute URL of an API path such as `/stories`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn secs_var(key: &str) -> Option<Duration> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let config = ClientConfig {
            base_url: "http://api.example/api/v1/".into(),
            ..ClientConfig::default()
        };
        assert_eq!(config.url("/stories"), "http://api.example/api/v1/stories");
    }
}
