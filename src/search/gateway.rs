use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::cache::ResponseCache;
use super::types::RepositoryItem;
use super::SearchError;
use crate::github::{self, SearchClient};

/// The single seam the rest of the application depends on for results.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    async fn fetch_repositories(&self, query: &str) -> Result<Vec<RepositoryItem>, SearchError>;
}

/// Cache-first gateway: only successfully decoded responses are cached.
pub struct SearchGateway<C> {
    client: C,
    cache: Mutex<ResponseCache>,
}

impl<C: SearchClient> SearchGateway<C> {
    pub fn new(client: C, cache: ResponseCache) -> Self {
        Self {
            client,
            cache: Mutex::new(cache),
        }
    }

    #[cfg(test)]
    async fn cached(&self, query: &str) -> bool {
        self.cache.lock().await.contains(query)
    }
}

#[async_trait]
impl<C: SearchClient> RepositoryGateway for SearchGateway<C> {
    #[instrument(skip(self))]
    async fn fetch_repositories(&self, query: &str) -> Result<Vec<RepositoryItem>, SearchError> {
        // Lock is released before the network call
        let hit = self.cache.lock().await.get(query);
        if let Some(response) = hit {
            debug!(items = response.items.len(), "cache hit");
            return Ok(response.to_domain());
        }
        debug!("cache miss, querying search API");

        let body = self.client.search(query).await.map_err(|e| {
            warn!(error = %e, "search request failed");
            SearchError::from(e)
        })?;

        let response = github::decode(&body).map_err(|e| {
            warn!(error = %e, "search response could not be decoded");
            SearchError::from(e)
        })?;

        let items = response.to_domain();
        self.cache.lock().await.put(query, response);
        debug!(items = items.len(), "cached search response");
        Ok(items)
    }
}
