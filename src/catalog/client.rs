//! HTTP client for the catalog site using wreq for TLS fingerprint emulation.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Trait for fetching catalog pages - enables mocking for tests.
#[async_trait]
pub trait CatalogFetch: Send + Sync {
    /// Fetches one catalog page and returns its HTML body.
    ///
    /// `Ok(None)` signals a non-200 response; the URL and status code have
    /// already been logged. Transport failures are real errors.
    async fn page(&self, url: &str) -> Result<Option<String>>;
}

/// Catalog HTTP client with browser impersonation.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl CatalogFetch for CatalogClient {
    async fn page(&self, url: &str) -> Result<Option<String>> {
        info!("Fetching catalog page: {}", url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "es-ES,es;q=0.9,en;q=0.8")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status != 200 {
            warn!("Request for {} failed with status {}", url, status);
            return Ok(None);
        }

        let body = response.text().await.context("Failed to read response body")?;
        Ok(Some(body))
    }
}
