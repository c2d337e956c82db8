//! JSON-file-backed recent-search store.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

use ms_core::ports::RecentSearchStorePort;

const STORE_FILE: &str = "recent_searches.json";

/// Persists the recent-search term list as a JSON string array.
///
/// The ordering/capacity/de-dup contract lives in
/// [`ms_core::recent::RecentSearches`]; this adapter only moves the list to
/// and from disk.
pub struct FileRecentSearchStore {
    path: PathBuf,
}

impl FileRecentSearchStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform's user data directory.
    pub fn at_default_location() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("mediaseek").join(STORE_FILE)))
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create store dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write through a temp file and rename so the target is either the
    /// previous contents or the fully written new contents.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp store failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp store to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl RecentSearchStorePort for FileRecentSearchStore {
    async fn load(&self) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("read recent searches failed: {}", self.path.display()))
            }
        };

        let terms: Vec<String> = serde_json::from_str(&content)
            .with_context(|| format!("parse recent searches failed: {}", self.path.display()))?;
        Ok(terms)
    }

    async fn save(&self, terms: &[String]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(terms).context("serialize recent searches failed")?;
        self.atomic_write(&content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileRecentSearchStore::new(dir.path().join("nested").join(STORE_FILE));

        let terms = vec!["emily".to_string(), "dunkirk".to_string()];
        store.save(&terms).await.unwrap();

        assert_eq!(store.load().await.unwrap(), terms);
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileRecentSearchStore::new(dir.path().join(STORE_FILE));

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        std::fs::write(&path, "not json").unwrap();

        let store = FileRecentSearchStore::new(path);
        assert!(store.load().await.is_err());
    }

    #[tokio::test]
    async fn save_overwrites_the_previous_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileRecentSearchStore::new(dir.path().join(STORE_FILE));

        store.save(&["a".to_string()]).await.unwrap();
        store.save(&["b".to_string(), "a".to_string()]).await.unwrap();

        assert_eq!(store.load().await.unwrap(), ["b", "a"]);
    }
}
