//! Asynchronous object persistence over folder/file storage.
//!
//! This crate saves in-memory values as individual files inside folders
//! and loads them back, either by name or by scanning a whole folder into
//! a typed collection. Folders are created idempotently; files are deleted
//! with strict or best-effort semantics.
//!
//! Failures come in two tiers. Routine ones (missing file, content that
//! does not parse as the requested type, blank file name, empty stream)
//! collapse into `false`/`None` sentinels so callers are never forced into
//! error handling for everyday cache misses. Structural ones (folder
//! creation, strict deletes) propagate as [`StoreError`], because they
//! indicate environment problems the caller must react to.
//!
//! All operations are plain `async fn`s; nothing runs until the returned
//! future is awaited, and dropping it before then cancels for free.
//!
//! # Example
//!
//! ```no_run
//! use serde::{Deserialize, Serialize};
//! use stowage_store::{ObjectStore, StoreConfig};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Settings {
//!     theme: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> stowage_store::Result<()> {
//!     let root = StoreConfig::from_data_dir("my-app")?.ensure_root().await?;
//!     let store = ObjectStore::new(root);
//!
//!     let saved = store
//!         .save("settings.json", &Settings { theme: "dark".into() })
//!         .await;
//!     assert!(saved);
//!
//!     let settings: Option<Settings> = store.load("settings.json").await;
//!     assert!(settings.is_some());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod delete;
pub mod error;
pub mod folder;
pub mod serializer;
pub mod store;
pub mod stream;

pub use config::StoreConfig;
pub use delete::{delete_file, safe_delete_file};
pub use error::{Result, SerializerError, StoreError};
pub use folder::{Folder, FolderManager};
pub use serializer::{JsonSerializer, Serializer};
pub use store::ObjectStore;
