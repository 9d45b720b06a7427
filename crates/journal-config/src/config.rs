use journal_models::SortOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Movie catalog connection settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TmdbConfig {
    /// API key; normally kept in credentials.toml instead
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchConfig {
    /// Quiet period before a search is issued
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Queries shorter than this (after trimming) are not sent
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Override for the review collection file (defaults to <data_dir>/reviews.json)
    #[serde(default)]
    pub reviews_file: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_sort: SortOrder,
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_base_url() -> String {
    DEFAULT_TMDB_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_TMDB_IMAGE_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_min_query_length() -> usize {
    2
}

fn default_max_results() -> usize {
    10
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: default_language(),
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_length: default_min_query_length(),
            max_results: default_max_results(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tmdb.language.trim().is_empty() {
            return Err(anyhow::anyhow!("tmdb.language cannot be empty"));
        }
        if !self.tmdb.base_url.starts_with("http://") && !self.tmdb.base_url.starts_with("https://") {
            return Err(anyhow::anyhow!("tmdb.base_url must be an http(s) URL: {}", self.tmdb.base_url));
        }
        if !self.tmdb.image_base_url.starts_with("http://") && !self.tmdb.image_base_url.starts_with("https://") {
            return Err(anyhow::anyhow!("tmdb.image_base_url must be an http(s) URL: {}", self.tmdb.image_base_url));
        }
        if self.search.min_query_length == 0 {
            return Err(anyhow::anyhow!("search.min_query_length must be at least 1"));
        }
        // TMDB returns 20 results per page and only the first page is requested
        if self.search.max_results == 0 || self.search.max_results > 20 {
            return Err(anyhow::anyhow!("search.max_results must be between 1 and 20"));
        }
        Ok(())
    }

    /// Resolve where the review collection lives
    pub fn reviews_file(&self, default: PathBuf) -> PathBuf {
        self.storage.reviews_file.clone().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.tmdb.language = "ko-KR".to_string();
        config.search.debounce_ms = 250;
        config.display.default_sort = SortOrder::RatingHigh;

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.tmdb.language, "ko-KR");
        assert_eq!(loaded.search.debounce_ms, 250);
        assert_eq!(loaded.search.max_results, 10);
        assert_eq!(loaded.display.default_sort, SortOrder::RatingHigh);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[search]\ndebounce_ms = 100\n").unwrap();
        assert_eq!(config.search.debounce_ms, 100);
        assert_eq!(config.search.min_query_length, 2);
        assert_eq!(config.tmdb.base_url, DEFAULT_TMDB_BASE_URL);
        assert_eq!(config.display.default_sort, SortOrder::Latest);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.search.debounce_ms, 500);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.search.max_results = 50;
        assert!(config.validate().is_err());

        config.search.max_results = 10;
        config.tmdb.base_url = "ftp://example".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reviews_file_override() {
        let mut config = Config::default();
        let default = PathBuf::from("/data/reviews.json");
        assert_eq!(config.reviews_file(default.clone()), default);

        config.storage.reviews_file = Some(PathBuf::from("/elsewhere/r.json"));
        assert_eq!(config.reviews_file(default), PathBuf::from("/elsewhere/r.json"));
    }
}
