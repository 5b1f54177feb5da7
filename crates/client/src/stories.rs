//! Story fetching and submission.

use companion_core::language::Language;
use companion_core::story::{fallback_stories, Story};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{status_error, ApiClient};
use crate::error::ClientError;
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
struct SubmitStory<'a> {
    message: &'a str,
    language: Language,
}

#[derive(Debug, Deserialize)]
struct SubmitStoryAck {
    success: bool,
}

#[derive(Debug, Clone)]
pub struct StoryClient {
    api: ApiClient,
}

impl StoryClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Load every story. Never fails: any problem reaching or understanding
    /// the API yields the built-in fallback list.
    pub async fn load_stories(&self) -> Vec<Story> {
        match self.fetch_stories().await {
            Ok(stories) => stories,
            Err(err) => {
                tracing::warn!(error = %err, "Story fetch failed, using fallback stories");
                fallback_stories()
            }
        }
    }

    /// Fetch stories from the API, surfacing every failure.
    pub async fn fetch_stories(&self) -> Result<Vec<Story>, ClientError> {
        let response = self.api.get_raw("/stories").await?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ClientError::UnexpectedShape(e.to_string()))?;
        ApiResponse::decode(body)?.into_stories()
    }

    /// Send a visitor's story to the site owner.
    pub async fn submit_story(&self, message: &str, language: Language) -> Result<(), ClientError> {
        let ack: SubmitStoryAck = self
            .api
            .post_json("/submit-story", &SubmitStory { message, language })
            .await?;
        if !ack.success {
            return Err(ClientError::Api("Story submission was not accepted".into()));
        }
        Ok(())
    }
}
