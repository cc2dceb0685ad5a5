//! Folder handles and idempotent folder creation.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{Result, StoreError};

/// Rejects empty or all-whitespace names.
pub(crate) fn valid_name(name: &str) -> Result<&str> {
    if name.trim().is_empty() {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(name)
}

/// Immutable handle to a directory in the storage hierarchy.
///
/// A `Folder` is a location reference, not an open resource; it is cheap to
/// clone and safe to share between concurrent operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    path: PathBuf,
}

impl Folder {
    /// Resolves an existing directory into a folder handle.
    ///
    /// # Errors
    /// Returns `FolderNotFound` if the path does not exist or is not a
    /// directory.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => Ok(Self { path }),
            _ => Err(StoreError::FolderNotFound { path }),
        }
    }

    /// Wraps a path that is already known to be a directory.
    pub(crate) fn from_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the underlying path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path of a leaf entry inside this folder.
    pub(crate) fn file_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Returns `true` if a plain file of the given name currently exists.
    pub async fn contains(&self, file_name: &str) -> bool {
        match fs::metadata(self.file_path(file_name)).await {
            Ok(meta) => meta.is_file(),
            Err(_) => false,
        }
    }

    /// Lists the names of the plain files in this folder, in backend order.
    ///
    /// Subdirectories and entries whose names are not valid UTF-8 are
    /// skipped.
    pub async fn file_names(&self) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?
        {
            let file_type = entry.file_type().await.map_err(|source| StoreError::Read {
                path: entry.path(),
                source,
            })?;
            if !file_type.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }
}

/// Creates folders idempotently under a default or explicit parent.
///
/// Unlike the save and load operations, creation failures propagate:
/// a folder that cannot be created indicates an environment problem the
/// caller must react to.
pub struct FolderManager {
    default_folder: Folder,
}

impl FolderManager {
    /// Creates a manager rooted at the given default folder.
    pub fn new(default_folder: Folder) -> Self {
        Self { default_folder }
    }

    /// Returns the default parent folder.
    pub fn default_folder(&self) -> &Folder {
        &self.default_folder
    }

    /// Creates (or opens) a folder under the default folder.
    pub async fn create_folder(&self, name: &str) -> Result<Folder> {
        self.create_folder_in(&self.default_folder, name).await
    }

    /// Creates (or opens) a folder under an explicit parent.
    ///
    /// Open-if-exists semantics: calling this twice with the same name
    /// returns handles to the same logical folder.
    pub async fn create_folder_in(&self, parent: &Folder, name: &str) -> Result<Folder> {
        let name = valid_name(name)?;
        let path = parent.path().join(name);
        fs::create_dir_all(&path)
            .await
            .map_err(|source| StoreError::Directory {
                path: path.clone(),
                source,
            })?;
        Ok(Folder::from_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_name_rejects_blank() {
        assert!(matches!(valid_name(""), Err(StoreError::InvalidName(_))));
        assert!(matches!(valid_name("   "), Err(StoreError::InvalidName(_))));
        assert_eq!(valid_name("notes.json").unwrap(), "notes.json");
    }

    #[tokio::test]
    async fn test_open_missing_folder() {
        let dir = tempdir().unwrap();
        let result = Folder::open(dir.path().join("absent")).await;

        assert!(matches!(result, Err(StoreError::FolderNotFound { .. })));
    }

    #[tokio::test]
    async fn test_open_rejects_plain_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("entry");
        std::fs::write(&file, b"x").unwrap();

        let result = Folder::open(&file).await;
        assert!(matches!(result, Err(StoreError::FolderNotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_folder_is_idempotent() {
        let dir = tempdir().unwrap();
        let manager = FolderManager::new(Folder::from_path(dir.path().to_path_buf()));

        let first = manager.create_folder("cache").await.unwrap();
        let second = manager.create_folder("cache").await.unwrap();

        assert_eq!(first, second);
        assert!(first.path().is_dir());
    }

    #[tokio::test]
    async fn test_create_folder_over_file_fails() {
        let dir = tempdir().unwrap();
        let manager = FolderManager::new(Folder::from_path(dir.path().to_path_buf()));
        std::fs::write(dir.path().join("taken"), b"x").unwrap();

        let result = manager.create_folder("taken").await;
        assert!(matches!(result, Err(StoreError::Directory { .. })));
    }

    #[tokio::test]
    async fn test_create_folder_blank_name() {
        let dir = tempdir().unwrap();
        let manager = FolderManager::new(Folder::from_path(dir.path().to_path_buf()));

        let result = manager.create_folder("  ").await;
        assert!(matches!(result, Err(StoreError::InvalidName(_))));
    }

    #[tokio::test]
    async fn test_contains_and_file_names() {
        let dir = tempdir().unwrap();
        let folder = Folder::from_path(dir.path().to_path_buf());
        std::fs::write(dir.path().join("a.json"), b"{}").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        assert!(folder.contains("a.json").await);
        assert!(!folder.contains("sub").await);
        assert!(!folder.contains("missing.json").await);

        let names = folder.file_names().await.unwrap();
        assert_eq!(names, vec!["a.json".to_string()]);
    }
}
