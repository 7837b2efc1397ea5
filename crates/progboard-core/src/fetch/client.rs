//! HTTP page fetcher for progress pages.
//!
//! Issues one GET per page, backs off on rate limiting, and waits a fixed
//! settling delay after each navigation before handing the markup back.

use std::time::Duration;

use reqwest::{header, Client, Url};
use tracing::{debug, warn};

use super::{FetchError, PageFetcher};

// ============================================================================
// Constants
// ============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default pause after each navigation so late content can settle.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 2000;

/// Maximum number of retries for rate-limited (429) requests.
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds for rate limiting.
const INITIAL_BACKOFF_MS: u64 = 1000;

const USER_AGENT: &str = concat!("progboard/", env!("CARGO_PKG_VERSION"));

/// Page fetcher backed by a single reqwest client.
pub struct HttpPageFetcher {
    client: Option<Client>,
    settle_delay: Duration,
    initial_backoff: Duration,
}

impl HttpPageFetcher {
    pub fn new(request_timeout: Duration, settle_delay: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Some(client),
            settle_delay,
            initial_backoff: Duration::from_millis(INITIAL_BACKOFF_MS),
        })
    }

    fn parse_url(url: &str) -> Result<Url, FetchError> {
        let parsed = Url::parse(url.trim()).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(FetchError::InvalidUrl(format!("unsupported scheme '{}' in {}", other, url))),
        }
    }

    /// Returns Ok(Some(body)) on success, Ok(None) when rate limited.
    async fn check_response_for_retry(response: reqwest::Response) -> Result<Option<String>, FetchError> {
        let status = response.status();
        if status.is_success() {
            Ok(Some(response.text().await?))
        } else if status.as_u16() == 429 {
            Ok(None)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(FetchError::from_status(status, &body))
        }
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&mut self, url: &str) -> Result<String, FetchError> {
        let client = self.client.as_ref().ok_or(FetchError::SessionClosed)?;
        let url = Self::parse_url(url)?;

        let mut retries = 0;
        let mut backoff = self.initial_backoff;

        let body = loop {
            let response = client
                .get(url.clone())
                .header(header::ACCEPT, "text/html,application/xhtml+xml")
                .send()
                .await?;

            match Self::check_response_for_retry(response).await? {
                Some(body) => break body,
                None => {
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(FetchError::RateLimited);
                    }
                    warn!(url = %url, retry = retries, backoff_ms = backoff.as_millis() as u64, "Rate limited, backing off");
                    tokio::time::sleep(backoff).await;
                    backoff *= 2; // Exponential backoff
                }
            }
        };

        if !self.settle_delay.is_zero() {
            tokio::time::sleep(self.settle_delay).await;
        }

        debug!(url = %url, bytes = body.len(), "Fetched page");
        Ok(body)
    }

    fn release(&mut self) {
        if self.client.take().is_some() {
            debug!("HTTP client released");
        }
    }
}
