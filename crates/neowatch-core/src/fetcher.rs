//! Per-day feed requests.

use std::sync::Arc;
use std::time::Duration;

use crate::config::FeedConfig;
use crate::error::FetchError;
use crate::feed::FeedPayload;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::retry::RetryConfig;
use crate::FeedDate;

/// Client for the NeoWs feed endpoint.
#[derive(Clone)]
pub struct NeoFeedClient {
    http_client: Arc<dyn HttpClient>,
    config: FeedConfig,
}

impl NeoFeedClient {
    /// Client backed by reqwest.
    pub fn new(config: FeedConfig) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: FeedConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig::new(self.config.max_attempts)
    }

    /// Request for a feed window that starts and ends on `date`.
    pub fn request_for(&self, date: FeedDate) -> HttpRequest {
        let day = date.format_iso();
        HttpRequest::get(&self.config.base_url)
            .with_query("start_date", day.clone())
            .with_query("end_date", day)
            .with_query("api_key", &self.config.api_key)
    }

    /// One request for `date`, raced against the configured timeout.
    ///
    /// When the timer wins, the in-flight request is dropped and any late
    /// response is discarded.
    pub async fn fetch_day(&self, date: FeedDate) -> Result<FeedPayload, FetchError> {
        let timeout_ms = self.config.timeout_ms;
        tracing::debug!(%date, timeout_ms, "requesting feed day");

        let response = tokio::time::timeout(
            Duration::from_millis(timeout_ms),
            self.http_client.execute(self.request_for(date)),
        )
        .await
        .map_err(|_| FetchError::Timeout {
            after_ms: timeout_ms,
        })?
        .map_err(|error| FetchError::Transport(error.message().to_owned()))?;

        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
            });
        }

        let payload = FeedPayload::parse(&response.body)?;
        tracing::debug!(%date, entries = payload.entry_count(), "feed day decoded");
        Ok(payload)
    }

    /// [`fetch_day`](Self::fetch_day) under the client's retry budget.
    pub async fn fetch_day_with_retry(&self, date: FeedDate) -> Result<FeedPayload, FetchError> {
        self.fetch_day_with(date, &self.retry_config()).await
    }

    pub async fn fetch_day_with(
        &self,
        date: FeedDate,
        retry: &RetryConfig,
    ) -> Result<FeedPayload, FetchError> {
        let label = date.format_iso();
        retry.run(&label, |_| self.fetch_day(date)).await
    }
}
