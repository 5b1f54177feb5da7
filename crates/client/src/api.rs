//! Thin JSON-over-HTTP wrapper shared by the typed clients.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Error body produced by the API: `{ "error": "...", "code": "..." }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Shared HTTP client for the data API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET a path and return the raw response, whatever its status.
    pub async fn get_raw(&self, path: &str) -> Result<Response, ClientError> {
        Ok(self.http.get(self.config.url(path)).send().await?)
    }

    /// GET a path and decode a 2xx JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.get_raw(path).await?;
        decode(response).await
    }

    /// POST a JSON body and decode a 2xx JSON answer.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.config.url(path))
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    /// DELETE a path and return the raw response, whatever its status.
    pub async fn delete_raw(&self, path: &str) -> Result<Response, ClientError> {
        Ok(self.http.delete(self.config.url(path)).send().await?)
    }
}

/// Decode a 2xx JSON body, or turn the error body into [`ClientError::Status`].
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status, response).await);
    }
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ClientError::UnexpectedShape(e.to_string()))
}

pub(crate) async fn status_error(status: StatusCode, response: Response) -> ClientError {
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|b| b.error)
        .unwrap_or(text);
    ClientError::Status {
        status: status.as_u16(),
        message,
    }
}
