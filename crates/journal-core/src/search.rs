use journal_config::SearchConfig;
use journal_models::MovieSearchResult;
use journal_sources::MovieCatalog;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// What became of one submitted query
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Latest query; results as returned by the catalog
    Results(Vec<MovieSearchResult>),
    /// Query too short; any visible results should be cleared
    Cleared,
    /// A newer query was submitted before this one finished
    Superseded,
}

/// Debounced catalog search keyed by a request generation.
///
/// Each `submit` takes a new generation. A submission only reaches the
/// catalog if no newer one arrived during the debounce delay, and its
/// response is only handed back if it is still the newest when it lands.
pub struct DebouncedSearch {
    catalog: Arc<dyn MovieCatalog>,
    generation: AtomicU64,
    delay: Duration,
    min_query_length: usize,
}

impl DebouncedSearch {
    pub fn new(catalog: Arc<dyn MovieCatalog>, delay: Duration, min_query_length: usize) -> Self {
        Self {
            catalog,
            generation: AtomicU64::new(0),
            delay,
            min_query_length,
        }
    }

    pub fn from_config(catalog: Arc<dyn MovieCatalog>, config: &SearchConfig) -> Self {
        Self::new(catalog, Duration::from_millis(config.debounce_ms), config.min_query_length)
    }

    pub async fn submit(&self, query: &str) -> SearchOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let query = query.trim();
        if query.chars().count() < self.min_query_length {
            return SearchOutcome::Cleared;
        }

        tokio::time::sleep(self.delay).await;
        if !self.is_current(generation) {
            debug!("Search {:?} superseded before it was sent", query);
            return SearchOutcome::Superseded;
        }

        let results = self.catalog.search(query).await;
        if !self.is_current(generation) {
            debug!("Discarding stale results for {:?}", query);
            return SearchOutcome::Superseded;
        }

        SearchOutcome::Results(results)
    }

    /// Invalidate anything pending or in flight
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
