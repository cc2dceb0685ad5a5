//! Store configuration and default-folder resolution.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{Result, StoreError};
use crate::folder::{valid_name, Folder};

/// Configuration for a store: where the root folder lives.
///
/// The root is resolved once at startup and injected into the stores that
/// need it; nothing in this crate holds mutable global state.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    root: PathBuf,
}

impl StoreConfig {
    /// Uses an explicit root path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves the root under the platform per-user local data directory.
    ///
    /// # Errors
    /// Returns `NoDataDir` if the platform reports no such directory, or
    /// `InvalidName` for a blank application name.
    pub fn from_data_dir(app_name: &str) -> Result<Self> {
        let app_name = valid_name(app_name)?;
        let base = dirs::data_local_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self {
            root: base.join(app_name),
        })
    }

    /// Returns the configured root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root directory if missing and returns its handle.
    ///
    /// Safe to call repeatedly; an existing root is opened as-is.
    pub async fn ensure_root(&self) -> Result<Folder> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StoreError::Directory {
                path: self.root.clone(),
                source,
            })?;
        Ok(Folder::from_path(self.root.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_root() {
        let config = StoreConfig::new("/tmp/stowage");
        assert_eq!(config.root(), Path::new("/tmp/stowage"));
    }

    #[test]
    fn test_from_data_dir_blank_app_name() {
        let result = StoreConfig::from_data_dir("  ");
        assert!(matches!(result, Err(StoreError::InvalidName(_))));
    }

    #[tokio::test]
    async fn test_ensure_root_creates_and_reopens() {
        let dir = tempdir().unwrap();
        let config = StoreConfig::new(dir.path().join("store"));

        let first = config.ensure_root().await.unwrap();
        assert!(first.path().is_dir());

        // Second resolution opens the same directory.
        let second = config.ensure_root().await.unwrap();
        assert_eq!(first, second);
    }
}
