//! File deletion, strict and best-effort.

use std::io;

use tokio::fs;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::folder::{valid_name, Folder};

/// Deletes a named file from a folder.
///
/// Strict: the file must resolve, and the delete must succeed.
///
/// # Errors
/// Returns `NotFound` if there is no file of that name, and `Write` if
/// the backend refuses the delete.
pub async fn delete_file(folder: &Folder, file_name: &str) -> Result<()> {
    let file_name = valid_name(file_name)?;
    let path = folder.file_path(file_name);

    let meta = fs::metadata(&path).await.map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound { path: path.clone() },
        _ => StoreError::Read {
            path: path.clone(),
            source,
        },
    })?;
    if !meta.is_file() {
        return Err(StoreError::NotFound { path });
    }

    fs::remove_file(&path)
        .await
        .map_err(|source| StoreError::Write { path, source })?;
    Ok(())
}

/// Deletes a named file, converting every failure into `false`.
///
/// For callers that prefer uniform sentinel handling over error
/// propagation; the failure detail still reaches the diagnostic log.
pub async fn safe_delete_file(folder: &Folder, file_name: &str) -> bool {
    match delete_file(folder, file_name).await {
        Ok(()) => true,
        Err(e) => {
            debug!(file = file_name, error = %e, "delete failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_delete_existing_file() {
        let dir = tempdir().unwrap();
        let folder = Folder::from_path(dir.path().to_path_buf());
        let path = dir.path().join("doomed.json");
        std::fs::write(&path, b"{}").unwrap();

        delete_file(&folder, "doomed.json").await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_strict_delete_missing_is_error() {
        let dir = tempdir().unwrap();
        let folder = Folder::from_path(dir.path().to_path_buf());

        let result = delete_file(&folder, "absent.json").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_safe_delete_missing_is_false() {
        let dir = tempdir().unwrap();
        let folder = Folder::from_path(dir.path().to_path_buf());

        assert!(!safe_delete_file(&folder, "absent.json").await);
    }

    #[tokio::test]
    async fn test_safe_delete_existing_is_true() {
        let dir = tempdir().unwrap();
        let folder = Folder::from_path(dir.path().to_path_buf());
        std::fs::write(dir.path().join("entry"), b"x").unwrap();

        assert!(safe_delete_file(&folder, "entry").await);
    }

    #[tokio::test]
    async fn test_delete_directory_is_not_found() {
        let dir = tempdir().unwrap();
        let folder = Folder::from_path(dir.path().to_path_buf());
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let result = delete_file(&folder, "sub").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }
}
