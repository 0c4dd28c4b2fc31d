//! HTTP client for the crawl
//!
//! Thin reqwest wrapper with a user agent, timeout and retry with
//! exponential backoff. A non-2xx status is an error like any transport
//! failure; the rest of the pipeline only ever sees complete bodies.

use std::time::Duration;

use reqwest::Client;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::Result;

/// Configuration for [`HttpClient`]
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Maximum number of attempts per request
    pub max_retries: u32,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            max_retries: 3,
            user_agent: concat!("jumia-archiver/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// HTTP client with retry and backoff
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch a page body as text.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.get_with_retries(url).await?;
        Ok(response.text().await?)
    }

    /// Fetch a binary body (image downloads).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get_with_retries(url).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_with_retries(&self, url: &str) -> Result<reqwest::Response> {
        let max_attempts = self.config.max_retries.max(1);
        let mut attempt = 1;

        loop {
            debug!("GET {} (attempt {}/{})", url, attempt, max_attempts);
            match self.get_once(url).await {
                Ok(response) => return Ok(response),
                Err(e) if attempt < max_attempts => {
                    warn!("attempt {} failed for {}: {}", attempt, url, e);
                    // 1s, 2s, 4s, ...
                    sleep(Duration::from_secs(2u64.pow(attempt - 1))).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_once(&self, url: &str) -> Result<reqwest::Response> {
        let response = self.client.get(url).send().await?;
        Ok(response.error_for_status()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn custom_config() {
        let config = HttpClientConfig {
            timeout_seconds: 5,
            max_retries: 1,
            user_agent: "test-agent".to_string(),
        };
        assert!(HttpClient::with_config(config).is_ok());
    }

    #[test]
    fn default_user_agent_carries_version() {
        let config = HttpClientConfig::default();
        assert!(config.user_agent.starts_with("jumia-archiver/"));
    }
}
