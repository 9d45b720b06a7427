use async_trait::async_trait;
use journal_models::{MovieDetails, MovieSearchResult};

/// Read-only movie metadata lookup.
///
/// Implementations never surface errors: a failed search is an empty list and
/// a failed detail lookup is `None`.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    fn catalog_name(&self) -> &str;

    /// Up to the configured number of candidates, in the service's order
    async fn search(&self, query: &str) -> Vec<MovieSearchResult>;

    async fn get_details(&self, catalog_id: u64) -> Option<MovieDetails>;

    /// Full image URL for a catalog poster path
    fn resolve_poster_url(&self, path: Option<&str>) -> Option<String>;
}
