use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{shorten_endpoint, ShortenRequest, ShortenResponse};
use tracing::{debug, warn};

pub mod config;
pub mod error;
pub mod form;
pub mod submission;

pub use config::{load_settings, ClientSettings};
pub use error::{ErrorCategory, ShortenError};
pub use form::{can_submit, parse_ttl, FormState, ValidatedRequest};
pub use submission::{ShortenResult, SubmissionController, SubmissionId, SubmissionState};

/// Remote side of a shorten attempt.
#[async_trait]
pub trait ShortenApi: Send + Sync {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ShortenError>;
}

/// HTTP client for the shortening service.
#[derive(Debug, Clone)]
pub struct ShortenerClient {
    http: Client,
    api_base: String,
}

impl ShortenerClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.into(),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(settings.api_base.clone())
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[async_trait]
impl ShortenApi for ShortenerClient {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ShortenError> {
        let endpoint = shorten_endpoint(&self.api_base);
        debug!(%endpoint, "posting shorten request");

        let res = self.http.post(&endpoint).json(request).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await?;
            warn!(status = status.as_u16(), "shorten request rejected by service");
            return Err(ShortenError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
