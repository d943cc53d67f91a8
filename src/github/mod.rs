pub mod wire;

pub use wire::{decode, DecodeError, SearchResponse};

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::ApiConfig;

/// Versioned media type for the GitHub v3 REST API.
pub const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Search request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Search request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Search API returned {status}")]
    Status { status: StatusCode },
}

/// Source of raw search response bodies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run one search for `query` and return the response body unparsed.
    async fn search(&self, query: &str) -> Result<String, NetworkError>;
}

/// Anonymous client for the GitHub repository search endpoint.
pub struct HttpSearchClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpSearchClient {
    pub fn new(config: &ApiConfig) -> Result<Self, NetworkError> {
        let timeout = config.timeout();
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(NetworkError::Build)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout,
        })
    }

    fn classify(&self, err: reqwest::Error) -> NetworkError {
        if err.is_timeout() {
            NetworkError::Timeout(self.timeout)
        } else {
            NetworkError::Transport(err)
        }
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn search(&self, query: &str) -> Result<String, NetworkError> {
        debug!("sending search request");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query)])
            .header(ACCEPT, GITHUB_V3_JSON)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        debug!(%status, "received search response");
        if !status.is_success() {
            return Err(NetworkError::Status { status });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        debug!(body_bytes = body.len(), "read search response body");
        Ok(body)
    }
}

/// Client that answers every query with the same body.
/// Backs the `--mock` demo mode, which needs no network access.
pub struct StaticSearchClient {
    body: String,
}

impl StaticSearchClient {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl SearchClient for StaticSearchClient {
    async fn search(&self, query: &str) -> Result<String, NetworkError> {
        debug!(query, "serving static search response");
        Ok(self.body.clone())
    }
}
