//! HTTP page fetcher with retry and exponential backoff
//!
//! The sole network boundary of the crawler. Issues plain GET requests with
//! a persistent browser-imitating header set, retrying transport failures
//! (timeouts, connection errors, non-2xx statuses) with exponential backoff.

use reqwest::Client;
use std::time::Duration;

use crate::crawler::headers::default_browser_headers;
use crate::utils::error::FetchError;

/// Listing page fetcher
///
/// The underlying client carries the fixed default headers, a cookie store
/// and gzip support; retry behavior is bounded by `max_retries` attempts
/// with `base_delay * 2^attempt` backoff between them.
pub struct PageFetcher {
    /// HTTP client with configured timeout, headers and compression
    client: Client,

    /// Total number of fetch attempts per URL
    max_retries: u32,

    /// Base delay in milliseconds for exponential backoff
    base_delay_ms: u64,

    /// Optional base URL override for testing with mock servers
    base_url: Option<String>,
}

impl PageFetcher {
    /// Create a new fetcher with default settings (3 attempts, 10s timeout)
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(3, Duration::from_secs(10), 1000)
    }

    /// Create a new fetcher with custom configuration
    ///
    /// # Arguments
    ///
    /// * `max_retries` - Total number of fetch attempts per URL
    /// * `timeout` - Per-attempt request timeout
    /// * `base_delay_ms` - Backoff unit in milliseconds (attempt 0 sleeps
    ///   one unit, attempt 1 two units, and so on)
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_config(
        max_retries: u32,
        timeout: Duration,
        base_delay_ms: u64,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .cookie_store(true)
            .default_headers(default_browser_headers())
            .build()?;

        Ok(Self {
            client,
            max_retries: max_retries.max(1),
            base_delay_ms,
            base_url: None,
        })
    }

    /// Create a new fetcher with a custom base URL for testing
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        let mut fetcher = Self::new()?;
        fetcher.base_url = Some(base_url.to_string());
        Ok(fetcher)
    }

    /// Create a new fetcher with custom config and base URL for testing
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_config_and_base_url(
        base_url: &str,
        max_retries: u32,
        timeout: Duration,
        base_delay_ms: u64,
    ) -> Result<Self, FetchError> {
        let mut fetcher = Self::with_config(max_retries, timeout, base_delay_ms)?;
        fetcher.base_url = Some(base_url.to_string());
        Ok(fetcher)
    }

    /// Fetch a page body with retry and exponential backoff.
    ///
    /// Performs up to `max_retries` attempts. Timeouts, connection errors
    /// and non-2xx statuses all count as failed attempts; after each failed
    /// attempt except the last, the fetcher sleeps `base_delay * 2^attempt`
    /// before retrying. A returned body is always a confirmed 2xx response.
    ///
    /// # Errors
    ///
    /// Propagates the last attempt's `FetchError` once all attempts fail
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let full_url = if let Some(base) = &self.base_url {
            format!("{base}{url}")
        } else {
            url.to_string()
        };

        let mut last_error = None;

        for attempt in 0..self.max_retries {
            match self.client.get(&full_url).send().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        if attempt > 0 {
                            tracing::debug!(url = %full_url, attempt, "Fetch succeeded after retry");
                        }
                        return Ok(response.text().await?);
                    }

                    last_error = Some(FetchError::Status(status.as_u16()));
                }
                Err(e) if e.is_timeout() => {
                    last_error = Some(FetchError::Timeout);
                }
                Err(e) => {
                    last_error = Some(FetchError::Http(e));
                }
            }

            tracing::warn!(
                url = %full_url,
                attempt = attempt + 1,
                max_retries = self.max_retries,
                error = %last_error.as_ref().map(ToString::to_string).unwrap_or_default(),
                "Fetch attempt failed"
            );

            if attempt + 1 < self.max_retries {
                tokio::time::sleep(Duration::from_millis(self.backoff_delay(attempt))).await;
            }
        }

        Err(last_error.unwrap_or(FetchError::RetriesExhausted))
    }

    /// Backoff delay in milliseconds after a failed attempt.
    ///
    /// Saturates instead of overflowing, so an extreme retry count never
    /// panics.
    fn backoff_delay(&self, attempt: u32) -> u64 {
        self.base_delay_ms
            .saturating_mul(2_u64.saturating_pow(attempt))
    }
}
