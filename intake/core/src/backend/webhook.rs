//! Webhook Submission Backend
//!
//! Posts the answer sheet to the spreadsheet-backed webhook (a Google Apps
//! Script web app in production). The collaborator appends a timestamped
//! row and sends the admin/user notification emails; none of that is
//! observable here, so any completed exchange counts as success.

use std::time::Duration;

use async_trait::async_trait;

use super::{SubmitBackend, SubmitError};
use crate::answers::AnswerSheet;
use crate::config::EngineConfig;

/// Environment variable naming the webhook endpoint
pub const WEBHOOK_URL_ENV: &str = "INTAKE_WEBHOOK_URL";

/// Webhook submission client
#[derive(Clone)]
pub struct WebhookBackend {
    endpoint: Option<String>,
    http_client: reqwest::Client,
}

impl WebhookBackend {
    /// Create a backend posting to the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            http_client: build_client(),
        }
    }

    /// Create a backend with no endpoint; every submit fails as
    /// [`SubmitError::Unconfigured`]
    pub fn unconfigured() -> Self {
        Self {
            endpoint: None,
            http_client: build_client(),
        }
    }

    /// Create a backend from the environment
    pub fn from_env() -> Self {
        match std::env::var(WEBHOOK_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::unconfigured(),
        }
    }

    /// Create a backend from resolved configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        match &config.webhook_url {
            Some(url) => Self::new(url.clone()),
            None => Self::unconfigured(),
        }
    }

    /// Whether an endpoint is configured
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
}

#[async_trait]
impl SubmitBackend for WebhookBackend {
    fn name(&self) -> &'static str {
        "Webhook"
    }

    async fn submit(&self, sheet: &AnswerSheet) -> Result<(), SubmitError> {
        let endpoint = self.endpoint.as_deref().ok_or(SubmitError::Unconfigured)?;
        let body = serde_json::to_string(sheet)?;

        // text/plain keeps the Apps Script collaborator from demanding a
        // CORS preflight; it parses the body as JSON regardless.
        let response = self
            .http_client
            .post(endpoint)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "submission delivered");

        // Fire-and-forget: the response body carries nothing we act on.
        Ok(())
    }
}
