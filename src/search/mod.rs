pub mod cache;
pub mod gateway;
pub mod types;

pub use cache::ResponseCache;
pub use gateway::{RepositoryGateway, SearchGateway};
pub use types::RepositoryItem;

use std::sync::Arc;
use thiserror::Error;

use crate::github::{DecodeError, NetworkError};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[allow(dead_code)] // Diagnostics helpers; the UI treats both kinds alike
impl SearchError {
    pub fn is_network(&self) -> bool {
        matches!(self, SearchError::Network(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, SearchError::Decode(_))
    }
}

/// Named entry point for "search repositories by query".
/// Kept as its own type so callers can substitute the gateway behind it.
#[derive(Clone)]
pub struct QueryUseCase {
    gateway: Arc<dyn RepositoryGateway>,
}

impl QueryUseCase {
    pub fn new(gateway: Arc<dyn RepositoryGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, query: &str) -> Result<Vec<RepositoryItem>, SearchError> {
        self.gateway.fetch_repositories(query).await
    }
}
