use std::path::{Path, PathBuf};

/// Overrides every location below with a single directory
pub const BASE_PATH_ENV: &str = "REELLOG_BASE_PATH";

const APP_DIR: &str = "reellog";

/// Where reellog keeps its configuration, journal data and logs
#[derive(Debug, Clone)]
pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    /// Platform directories, e.g. `~/.config/reellog` and `~/.local/share/reellog` on Linux.
    ///
    /// Returns `None` when the platform reports no home directory.
    pub fn platform() -> Option<Self> {
        let config_dir = dirs::config_dir()?.join(APP_DIR);
        let data_dir = dirs::data_local_dir()?.join(APP_DIR);
        Some(Self {
            log_dir: data_dir.join("logs"),
            config_dir,
            data_dir,
        })
    }

    /// Everything under one directory: config files at the top, data and logs below
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
            config_dir: base,
        }
    }

    /// `REELLOG_BASE_PATH` if set, else platform directories, else `./.reellog`
    pub fn from_env() -> Self {
        match std::env::var_os(BASE_PATH_ENV).filter(|v| !v.is_empty()) {
            Some(base) => Self::with_base(PathBuf::from(base)),
            None => Self::platform().unwrap_or_else(|| Self::with_base(format!(".{}", APP_DIR))),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Default location of the persisted review collection
    pub fn reviews_file(&self) -> PathBuf {
        self.data_dir.join("reviews.json")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn credentials_file(&self) -> PathBuf {
        self.config_dir.join("credentials.toml")
    }
}

impl Default for PathManager {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_under_base() {
        let paths = PathManager::with_base("/tmp/reellog-test");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/reellog-test/config.toml"));
        assert_eq!(paths.credentials_file(), PathBuf::from("/tmp/reellog-test/credentials.toml"));
        assert_eq!(paths.reviews_file(), PathBuf::from("/tmp/reellog-test/data/reviews.json"));
        assert_eq!(paths.log_dir(), Path::new("/tmp/reellog-test/logs"));
    }

    #[test]
    fn test_platform_layout_keeps_data_apart_from_config() {
        if let Some(paths) = PathManager::platform() {
            assert!(paths.config_dir().ends_with(APP_DIR));
            assert!(paths.reviews_file().starts_with(paths.data_dir()));
        }
    }
}
