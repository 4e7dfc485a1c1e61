//! Record fetching.
//!
//! [`RecordFetcher`] is the seam between the List resource and the network.
//! [`HttpFetcher`] is the reqwest-backed implementation; tests substitute
//! their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{FetchError, Result};

/// Fetches a raw record document by node path, e.g. `lists/{id}`.
#[async_trait]
pub trait RecordFetcher: Send + Sync {
    async fn fetch(&self, node: &str) -> std::result::Result<Value, FetchError>;
}

/// Fetches records from the REST API with a single GET per call.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    /// Build a fetcher from client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(FetchError::from)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a fetcher from `riq.toml` and `RIQ_*` variables.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::load()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, node: &str) -> std::result::Result<Url, FetchError> {
        let raw = format!("{}/{}", self.base_url, node.trim_start_matches('/'));
        Url::parse(&raw).map_err(|source| FetchError::InvalidUrl { url: raw, source })
    }
}

#[async_trait]
impl RecordFetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, node: &str) -> std::result::Result<Value, FetchError> {
        let url = self.url_for(node)?;
        debug!(%url, "fetching record");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
