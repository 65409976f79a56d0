use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use super::request::GenerationRequest;
use crate::config::AppConfig;

/// Why a submission failed
///
/// The UI shows one failure notice for all of these; the variants exist for the logs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("endpoint returned HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}

/// Expected success body: `{"response": "<markdown>"}`
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    response: String,
}

/// HTTP client for the generation endpoint
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GenerationClient {
    pub fn new(config: &AppConfig) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the prompt and screenshots, returning the generated markdown
    pub async fn generate(&self, request: GenerationRequest) -> Result<String, SubmitError> {
        let image_count = request.images.len();
        let form = request.into_form()?;

        debug!(endpoint = %self.endpoint, image_count, "posting generation request");
        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let text = parse_response(&body)?;
        info!(chars = text.len(), "generation result received");
        Ok(text)
    }
}

/// Pull the result text out of a success body
pub fn parse_response(body: &str) -> Result<String, SubmitError> {
    serde_json::from_str::<GenerationResponse>(body)
        .map(|parsed| parsed.response)
        .map_err(|err| SubmitError::Malformed(err.to_string()))
}
