use tracing::{debug, error};

use crate::{
    config::ClientConfig,
    error::{Result, SummarizeError},
    types::{SummarizeRequest, SummarizeResponse, SummaryResult},
};

/// HTTP client for the `/summarize` endpoint.
#[derive(Clone, Debug)]
pub struct SummaryClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl SummaryClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request a summary, keeping the failure cause.
    pub async fn fetch_summary(&self, url: &str) -> Result<String> {
        let endpoint = self.config.summarize_url();
        debug!(%endpoint, %url, "requesting summary");

        let response = self
            .http
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .json(&SummarizeRequest {
                url: url.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummarizeError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SummarizeResponse = serde_json::from_str(&body)?;

        Ok(parsed.summary)
    }

    /// Request a summary, collapsing every failure into the fallback message.
    pub async fn summarize(&self, url: &str) -> SummaryResult {
        match self.fetch_summary(url).await {
            Ok(summary) => SummaryResult::Success(summary),
            Err(e) => {
                error!(error = %e, %url, "summary request failed");
                SummaryResult::Failure
            }
        }
    }
}
