use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use journal_config::{Config, CredentialStore, PathManager};
use journal_core::{JsonFileStorage, ReviewStore};
use journal_models::Review;
use journal_sources::TmdbClient;
use std::sync::Arc;
use tracing::debug;

pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Paths and configuration shared by every command
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let paths = PathManager::default();
        let config_file = paths.config_file();
        let config = Config::load_or_default(&config_file)
            .map_err(|e| eyre!("{}", e))
            .wrap_err_with(|| format!("Failed to load {}", config_file.display()))?;
        config
            .validate()
            .map_err(|e| eyre!("Invalid configuration in {}: {}", config_file.display(), e))?;

        Ok(Self { paths, config })
    }

    pub fn reviews_file(&self) -> std::path::PathBuf {
        self.config.reviews_file(self.paths.reviews_file())
    }

    pub fn open_store(&self) -> ReviewStore<JsonFileStorage> {
        let path = self.reviews_file();
        debug!("Opening review store at {}", path.display());
        ReviewStore::open(JsonFileStorage::new(path))
    }

    /// API key from the environment, then credentials.toml, then config.toml
    pub fn api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Some(key);
            }
        }

        match CredentialStore::load(self.paths.credentials_file()) {
            Ok(store) => {
                if let Some(key) = store.tmdb_api_key() {
                    return Some(key.to_string());
                }
            }
            Err(e) => debug!("Could not read credentials: {:#}", e),
        }

        self.config.tmdb.api_key.clone().filter(|key| !key.trim().is_empty())
    }

    pub fn catalog(&self) -> Result<Arc<TmdbClient>> {
        let api_key = self.api_key().ok_or_else(|| {
            eyre!(
                "No TMDB API key configured. Run `reellog config tmdb --api-key <KEY>` or set {}",
                API_KEY_ENV
            )
        })?;
        Ok(Arc::new(TmdbClient::from_config(&self.config.tmdb, api_key, self.config.search.max_results)))
    }
}

/// Find a review by exact id or by an unambiguous id prefix
pub fn resolve_review<'a>(reviews: &'a [Review], id: &str) -> Result<Option<&'a Review>> {
    let id = id.trim();
    if id.is_empty() {
        return Ok(None);
    }

    if let Some(exact) = reviews.iter().find(|review| review.id == id) {
        return Ok(Some(exact));
    }

    let matches: Vec<&Review> = reviews.iter().filter(|review| review.id.starts_with(id)).collect();
    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0])),
        n => Err(eyre!("ID prefix '{}' matches {} reviews; use more characters", id, n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use journal_models::StarRating;

    fn review(id: &str) -> Review {
        Review {
            id: id.to_string(),
            title: "T".to_string(),
            creator_name: "D".to_string(),
            rating: StarRating::new(3).unwrap(),
            content: "C".to_string(),
            poster_url: None,
            tmdb_id: None,
            release_year: None,
            genres: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_resolve_review_by_prefix() {
        let reviews = vec![review("abc123"), review("abd456"), review("ab")];

        assert_eq!(resolve_review(&reviews, "abc").unwrap().map(|r| r.id.as_str()), Some("abc123"));
        // Exact match wins over prefix ambiguity
        assert_eq!(resolve_review(&reviews, "ab").unwrap().map(|r| r.id.as_str()), Some("ab"));
        assert!(resolve_review(&reviews, "zz").unwrap().is_none());
        assert_eq!(resolve_review(&reviews, " abc123 ").unwrap().map(|r| r.id.as_str()), Some("abc123"));

        let ambiguous = vec![review("abc123"), review("abd456")];
        assert!(resolve_review(&ambiguous, "ab").is_err());
    }

    #[test]
    fn test_blank_id_matches_nothing() {
        let single = vec![review("5f0c-uuid")];
        assert!(resolve_review(&single, "").unwrap().is_none());
        assert!(resolve_review(&single, "  ").unwrap().is_none());
    }
}
