pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{Config, DisplayConfig, SearchConfig, StorageConfig, TmdbConfig, DEFAULT_TMDB_BASE_URL, DEFAULT_TMDB_IMAGE_BASE_URL};
pub use credentials::CredentialStore;
pub use paths::{PathManager, BASE_PATH_ENV};
