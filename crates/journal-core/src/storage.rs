use journal_models::Review;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("review file {path} is not a valid review list: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize reviews: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable home of the whole review collection.
///
/// The collection is always read and written as one document.
pub trait ReviewStorage {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<Vec<Review>>, StorageError>;

    /// Replace the stored collection
    fn save(&mut self, reviews: &[Review]) -> Result<(), StorageError>;

    /// Human-readable location, for logs
    fn location(&self) -> String;
}

/// Single JSON file holding the pretty-printed review array
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl ReviewStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<Review>>, StorageError> {
        if !self.path.exists() {
            debug!("Review file {:?} does not exist yet", self.path);
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;

        let reviews: Vec<Review> = serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        info!("Loaded {} reviews from {:?}", reviews.len(), self.path);
        Ok(Some(reviews))
    }

    fn save(&mut self, reviews: &[Review]) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = serde_json::to_string_pretty(reviews)?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, json).map_err(write_err)?;
        std::fs::rename(&temp_path, &self.path).map_err(write_err)?;

        debug!("Saved {} reviews to {:?}", reviews.len(), self.path);
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-process storage holding the last saved snapshot.
///
/// `failing()` builds one whose writes always fail.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    snapshot: Option<Vec<Review>>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            snapshot: Some(reviews),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Option<&[Review]> {
        self.snapshot.as_deref()
    }

    /// Number of successful saves
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ReviewStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<Review>>, StorageError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, reviews: &[Review]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        self.snapshot = Some(reviews.to_vec());
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use journal_models::StarRating;

    fn sample(id: &str) -> Review {
        Review {
            id: id.to_string(),
            title: "Heat".to_string(),
            creator_name: "Michael Mann".to_string(),
            rating: StarRating::new(4).unwrap(),
            content: "tense".to_string(),
            poster_url: Some("https://image.tmdb.org/t/p/w500/heat.jpg".to_string()),
            tmdb_id: Some(949),
            release_year: Some("1995".to_string()),
            genres: Some(vec!["Crime".to_string(), "Thriller".to_string()]),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 2, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("reviews.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("reviews.json");
        let mut storage = JsonFileStorage::new(path.clone());

        let reviews = vec![sample("b"), sample("a")];
        storage.save(&reviews).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(storage.load().unwrap(), Some(reviews));
    }

    #[test]
    fn test_corrupt_file_is_an_error_and_left_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.json");
        std::fs::write(&path, "{ not json").unwrap();

        let storage = JsonFileStorage::new(path.clone());
        assert!(matches!(storage.load(), Err(StorageError::Corrupt { .. })));
        assert!(path.exists());
    }

    #[test]
    fn test_memory_storage_failing_writes() {
        let mut storage = MemoryStorage::failing();
        assert!(storage.save(&[sample("a")]).is_err());
        assert!(storage.snapshot().is_none());
        assert_eq!(storage.writes(), 0);
    }
}
