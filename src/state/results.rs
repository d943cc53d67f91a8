use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use crate::search::{QueryUseCase, RepositoryItem, SearchError};

/// How the most recent search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No search has completed yet
    Pending,
    /// The search succeeded; the list may still be empty
    Loaded,
    /// The search failed and the list was cleared
    Failed { reason: String },
}

/// Everything a results screen needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSnapshot {
    /// Last submitted query
    pub query: Option<String>,
    pub repositories: Vec<RepositoryItem>,
    pub loading: bool,
    pub outcome: SearchOutcome,
}

impl Default for SearchSnapshot {
    /// The screen opens mid-search: loading with nothing to show.
    fn default() -> Self {
        Self {
            query: None,
            repositories: Vec::new(),
            loading: true,
            outcome: SearchOutcome::Pending,
        }
    }
}

/// Observable search results driven by `search()`.
///
/// Every search is tagged with a token. Only the completion carrying the
/// latest token may publish, so overlapping searches resolve to the most
/// recently issued one regardless of which response arrives last.
pub struct SearchResultState {
    use_case: QueryUseCase,
    state: watch::Sender<SearchSnapshot>,
    latest: AtomicU64,
}

impl SearchResultState {
    pub fn new(use_case: QueryUseCase) -> Self {
        let (state, _) = watch::channel(SearchSnapshot::default());
        Self {
            use_case,
            state,
            latest: AtomicU64::new(0),
        }
    }

    #[allow(dead_code)] // For renderers that redraw on every change
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.state.borrow().clone()
    }

    /// Run a search to completion and publish its result.
    pub async fn search(&self, text: &str) {
        let token = self.begin(text);
        self.run(token, text).await;
    }

    /// Mark the state as loading right away, then fetch on a background task.
    pub fn spawn_search(self: &Arc<Self>, text: &str) -> JoinHandle<()> {
        let token = self.begin(text);
        let this = Arc::clone(self);
        let text = text.to_string();
        tokio::spawn(async move { this.run(token, &text).await })
    }

    /// Re-run the last submitted query. Does nothing before the first search.
    pub async fn retry(&self) {
        let last = self.state.borrow().query.clone();
        match last {
            Some(query) => self.search(&query).await,
            None => debug!("retry requested before any search"),
        }
    }

    /// Issue a new token and flip to loading. Stale results stay visible.
    fn begin(&self, text: &str) -> u64 {
        let mut token = 0;
        // Token and loading flag change together under the watch lock
        self.state.send_modify(|s| {
            token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            s.query = Some(text.to_string());
            s.loading = true;
        });
        debug!(token, query = text, "search started");
        token
    }

    #[instrument(skip(self))]
    async fn run(&self, token: u64, text: &str) {
        let result = self.use_case.execute(text).await;
        self.complete(token, result);
    }

    fn complete(&self, token: u64, result: Result<Vec<RepositoryItem>, SearchError>) {
        self.state.send_if_modified(|s| {
            let latest = self.latest.load(Ordering::SeqCst);
            if token != latest {
                debug!(token, latest, "discarding stale search result");
                return false;
            }

            match result {
                Ok(items) => {
                    info!(results = items.len(), "search complete");
                    s.repositories = items;
                    s.outcome = SearchOutcome::Loaded;
                }
                Err(e) => {
                    info!(error = %e, "search failed");
                    s.repositories.clear();
                    s.outcome = SearchOutcome::Failed {
                        reason: e.to_string(),
                    };
                }
            }
            s.loading = false;
            true
        });
    }
}
