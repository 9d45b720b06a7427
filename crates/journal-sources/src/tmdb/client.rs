use crate::tmdb::{api, resolve_poster_url};
use crate::traits::MovieCatalog;
use async_trait::async_trait;
use journal_config::{TmdbConfig, DEFAULT_TMDB_BASE_URL, DEFAULT_TMDB_IMAGE_BASE_URL};
use journal_models::{MovieDetails, MovieSearchResult};
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info, warn};

const DEFAULT_MAX_RESULTS: usize = 10;

/// TMDB-backed movie catalog.
///
/// Every call is a single attempt with no retry. Failures are logged and
/// reported as empty results.
#[derive(Clone)]
pub struct TmdbClient {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
    image_base_url: String,
    language: String,
    max_results: usize,
}

impl TmdbClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            image_base_url: DEFAULT_TMDB_IMAGE_BASE_URL.to_string(),
            language: "en-US".to_string(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn from_config(config: &TmdbConfig, api_key: String, max_results: usize) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: config.base_url.clone(),
            image_base_url: config.image_base_url.clone(),
            language: config.language.clone(),
            max_results,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    fn catalog_name(&self) -> &str {
        "tmdb"
    }

    async fn search(&self, query: &str) -> Vec<MovieSearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match api::search_movies(&self.client, &self.base_url, &self.api_key, query, &self.language).await {
            Ok(response) => {
                let results = api::map_search_response(response, self.max_results);
                debug!("Catalog search for {:?} returned {} results", query, results.len());
                results
            }
            Err(e) => {
                warn!("Catalog search for {:?} failed: {}", query, e);
                Vec::new()
            }
        }
    }

    async fn get_details(&self, catalog_id: u64) -> Option<MovieDetails> {
        let details = match api::get_movie(&self.client, &self.base_url, &self.api_key, catalog_id, &self.language).await {
            Ok(details) => details,
            Err(e) => {
                warn!("Catalog details for movie {} failed: {}", catalog_id, e);
                return None;
            }
        };

        // A credits failure only costs the director name
        let credits = match api::get_credits(&self.client, &self.base_url, &self.api_key, catalog_id).await {
            Ok(credits) => Some(credits),
            Err(e) => {
                warn!("Catalog credits for movie {} failed: {}", catalog_id, e);
                None
            }
        };

        let details = api::map_details(details, credits.as_ref());
        info!("Fetched catalog details for {} ({})", details.title, catalog_id);
        Some(details)
    }

    fn resolve_poster_url(&self, path: Option<&str>) -> Option<String> {
        resolve_poster_url(&self.image_base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on the discard port locally, so requests fail fast
    fn unreachable_client(api_key: &str) -> TmdbClient {
        TmdbClient::new(api_key.to_string()).with_base_url("http://127.0.0.1:9")
    }

    #[tokio::test]
    async fn test_blank_query_returns_empty() {
        let client = unreachable_client("key");
        assert!(client.search("   ").await.is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_becomes_empty_results() {
        let client = unreachable_client("key");
        assert!(client.search("Inception").await.is_empty());
        assert!(client.get_details(27205).await.is_none());
    }

    #[tokio::test]
    async fn test_missing_api_key_becomes_empty_results() {
        let client = unreachable_client("");
        assert!(client.search("Inception").await.is_empty());
        assert!(client.get_details(27205).await.is_none());
    }

    #[test]
    fn test_from_config() {
        let mut config = TmdbConfig::default();
        config.language = "ko-KR".to_string();
        config.image_base_url = "https://img.example".to_string();
        let client = TmdbClient::from_config(&config, "key".to_string(), 5);

        assert_eq!(client.language(), "ko-KR");
        assert_eq!(client.catalog_name(), "tmdb");
        assert_eq!(
            client.resolve_poster_url(Some("/p.jpg")).as_deref(),
            Some("https://img.example/p.jpg")
        );
    }
}
