//! Story submission relay.
//!
//! Visitors can send in a story for the companion. Submissions are not
//! stored; they are forwarded once to an EmailJS template that mails them to
//! the site owner.

use std::time::Duration;

use async_trait::async_trait;
use companion_core::language::Language;
use serde::Serialize;

/// Default EmailJS send endpoint.
const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// HTTP timeout for a single send.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

const FROM_NAME: &str = "Claudia Story Submission";
const SUBJECT: &str = "New Story for Claudia";

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Relay returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

/// A story sent in by a visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorySubmission {
    pub message: String,
    pub language: Language,
}

/// Forwards story submissions to the site owner.
#[async_trait]
pub trait StoryRelay: Send + Sync {
    async fn submit(&self, submission: &StorySubmission) -> Result<(), RelayError>;
}

#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Address the template mails submissions to.
    pub recipient: String,
    pub endpoint: String,
}

impl EmailJsConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if any variable is missing, which disables submissions.
    ///
    /// | Variable                | Required |
    /// |-------------------------|----------|
    /// | `EMAILJS_SERVICE_ID`    | yes      |
    /// | `EMAILJS_TEMPLATE_ID`   | yes      |
    /// | `EMAILJS_PUBLIC_KEY`    | yes      |
    /// | `STORY_RECIPIENT_EMAIL` | yes      |
    pub fn from_env() -> Option<Self> {
        Some(Self {
            service_id: std::env::var("EMAILJS_SERVICE_ID").ok()?,
            template_id: std::env::var("EMAILJS_TEMPLATE_ID").ok()?,
            public_key: std::env::var("EMAILJS_PUBLIC_KEY").ok()?,
            recipient: std::env::var("STORY_RECIPIENT_EMAIL").ok()?,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    to_email: &'a str,
    from_name: &'a str,
    message: &'a str,
    language: Language,
    subject: &'a str,
}

/// Relay backed by the EmailJS REST API.
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsRelay {
    pub fn new(config: EmailJsConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    fn request<'a>(&'a self, submission: &'a StorySubmission) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                to_email: &self.config.recipient,
                from_name: FROM_NAME,
                message: &submission.message,
                language: submission.language,
                subject: SUBJECT,
            },
        }
    }
}

#[async_trait]
impl StoryRelay for EmailJsRelay {
    async fn submit(&self, submission: &StorySubmission) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request(submission))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(language = %submission.language, "Story submission relayed");
        Ok(())
    }
}
