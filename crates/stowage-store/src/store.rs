//! Object-level save and load operations.

use std::io::Cursor;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::io::{AsyncRead, AsyncSeek};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::folder::Folder;
use crate::serializer::{JsonSerializer, Serializer};
use crate::stream;

/// Saves and loads typed values as individual files inside folders.
///
/// Save and load are routine operations: their failures (missing file,
/// content that does not parse as the requested type, blank file name) are
/// reported as `false`/`None` sentinels rather than errors, so a caller
/// that forgot to check can never crash. The error detail is kept on the
/// diagnostic log channel.
///
/// Every operation is a plain `async fn`: no work happens until the
/// returned future is polled, and dropping it before that is a free
/// cancellation.
pub struct ObjectStore<S = JsonSerializer> {
    default_folder: Folder,
    serializer: S,
}

impl ObjectStore<JsonSerializer> {
    /// Creates a store writing pretty JSON into the given default folder.
    pub fn new(default_folder: Folder) -> Self {
        Self {
            default_folder,
            serializer: JsonSerializer::new(),
        }
    }
}

impl<S: Serializer> ObjectStore<S> {
    /// Creates a store with a custom serializer.
    pub fn with_serializer(default_folder: Folder, serializer: S) -> Self {
        Self {
            default_folder,
            serializer,
        }
    }

    /// Returns the default folder.
    pub fn default_folder(&self) -> &Folder {
        &self.default_folder
    }

    /// Saves a value to a named file in the default folder.
    pub async fn save<T: Serialize>(&self, file_name: &str, value: &T) -> bool {
        self.save_in(&self.default_folder, file_name, value).await
    }

    /// Saves a value to a named file in the given folder.
    ///
    /// The value is serialized fully into memory before the backend is
    /// touched; an existing file of the same name is replaced. Returns
    /// `false` on any failure.
    pub async fn save_in<T: Serialize>(&self, folder: &Folder, file_name: &str, value: &T) -> bool {
        match self.try_save(folder, file_name, value).await {
            Ok(written) => {
                debug!(file = file_name, bytes = written, "saved object");
                true
            }
            Err(e) => {
                debug!(file = file_name, error = %e, "save failed");
                false
            }
        }
    }

    async fn try_save<T: Serialize>(
        &self,
        folder: &Folder,
        file_name: &str,
        value: &T,
    ) -> Result<u64> {
        let bytes = self.serializer.to_bytes(value)?;
        stream::write_stream(folder, file_name, Cursor::new(bytes)).await
    }

    /// Saves a raw byte stream to a named file in the default folder.
    pub async fn save_stream<R>(&self, file_name: &str, data: R) -> bool
    where
        R: AsyncRead + AsyncSeek + Unpin,
    {
        self.save_stream_in(&self.default_folder, file_name, data)
            .await
    }

    /// Saves a raw byte stream to a named file in the given folder.
    ///
    /// Returns `true` only when the full copy and flush complete; a
    /// zero-length stream or blank file name yields `false` without
    /// writing anything.
    pub async fn save_stream_in<R>(&self, folder: &Folder, file_name: &str, data: R) -> bool
    where
        R: AsyncRead + AsyncSeek + Unpin,
    {
        match stream::write_stream(folder, file_name, data).await {
            Ok(written) => {
                debug!(file = file_name, bytes = written, "saved stream");
                true
            }
            Err(e) => {
                debug!(file = file_name, error = %e, "stream save failed");
                false
            }
        }
    }

    /// Loads a value from a named file in the default folder.
    pub async fn load<T: DeserializeOwned>(&self, file_name: &str) -> Option<T> {
        self.load_from(&self.default_folder, file_name).await
    }

    /// Loads a value from a named file in the given folder.
    ///
    /// Returns `None` when the file is missing or its content does not
    /// deserialize as `T`; the two cases are indistinguishable by
    /// contract.
    pub async fn load_from<T: DeserializeOwned>(&self, folder: &Folder, file_name: &str) -> Option<T> {
        match self.try_load(folder, file_name).await {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(file = file_name, error = %e, "load failed");
                None
            }
        }
    }

    async fn try_load<T: DeserializeOwned>(&self, folder: &Folder, file_name: &str) -> Result<T> {
        let bytes = stream::read_to_end(folder, file_name).await?;
        Ok(self.serializer.from_bytes(&bytes)?)
    }

    /// Scans a subfolder of the default folder into a typed collection.
    pub async fn load_list<T: DeserializeOwned>(&self, folder_name: &str) -> Option<Vec<T>> {
        self.load_list_from(&self.default_folder, folder_name).await
    }

    /// Scans a folder into a typed collection.
    ///
    /// A blank `folder_name` scans `folder` itself; otherwise the named
    /// subfolder is resolved first, and `None` is returned if it does not
    /// exist. Files that fail to load as `T` are skipped, so a
    /// mixed-content folder yields exactly the subset that matches. An
    /// existing folder with no matching files yields `Some` of an empty
    /// vector, which is a different outcome from `None`.
    pub async fn load_list_from<T: DeserializeOwned>(
        &self,
        folder: &Folder,
        folder_name: &str,
    ) -> Option<Vec<T>> {
        match self.try_load_list(folder, folder_name).await {
            Ok(items) => Some(items),
            Err(e) => {
                debug!(folder = folder_name, error = %e, "folder scan failed");
                None
            }
        }
    }

    async fn try_load_list<T: DeserializeOwned>(
        &self,
        folder: &Folder,
        folder_name: &str,
    ) -> Result<Vec<T>> {
        let target = if folder_name.trim().is_empty() {
            folder.clone()
        } else {
            Folder::open(folder.path().join(folder_name)).await?
        };

        let mut entries = fs::read_dir(target.path())
            .await
            .map_err(|source| StoreError::Read {
                path: target.path().to_path_buf(),
                source,
            })?;

        let mut items = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| StoreError::Read {
                path: target.path().to_path_buf(),
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
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            match self.try_load::<T>(&target, name).await {
                Ok(value) => items.push(value),
                Err(e) => debug!(file = name, error = %e, "skipping entry"),
            }
        }

        Ok(items)
    }
}
