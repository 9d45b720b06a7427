use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TmdbCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CredentialsFile {
    #[serde(default)]
    tmdb: TmdbCredentials,
}

/// Secrets kept apart from config.toml so the config can be shared.
///
/// ```toml
/// [tmdb]
/// api_key = "..."
/// ```
pub struct CredentialStore {
    path: PathBuf,
    data: CredentialsFile,
}

impl CredentialStore {
    /// Read `path`; a missing file is an empty store
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?
        } else {
            CredentialsFile::default()
        };
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        restrict_permissions(&self.path)?;
        Ok(())
    }

    pub fn tmdb_api_key(&self) -> Option<&str> {
        self.data
            .tmdb
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn set_tmdb_api_key(&mut self, key: impl Into<String>) {
        self.data.tmdb.api_key = Some(key.into());
    }

    /// Returns whether a key was stored
    pub fn clear_tmdb_api_key(&mut self) -> bool {
        self.data.tmdb.api_key.take().is_some()
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");

        let mut store = CredentialStore::load(&path).unwrap();
        store.set_tmdb_api_key("test_key");
        store.save().unwrap();

        let loaded = CredentialStore::load(&path).unwrap();
        assert_eq!(loaded.tmdb_api_key(), Some("test_key"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[tmdb]"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::load(dir.path().join("credentials.toml")).unwrap();
        assert!(store.tmdb_api_key().is_none());
    }

    #[test]
    fn test_clear_and_blank_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::load(dir.path().join("c.toml")).unwrap();
        assert!(!store.clear_tmdb_api_key());

        store.set_tmdb_api_key("   ");
        assert!(store.tmdb_api_key().is_none());

        store.set_tmdb_api_key("abc");
        assert!(store.clear_tmdb_api_key());
        assert!(store.tmdb_api_key().is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(&path, "[tmdb\napi_key = ").unwrap();
        assert!(CredentialStore::load(&path).is_err());
    }
}
