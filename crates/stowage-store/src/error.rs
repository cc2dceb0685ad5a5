//! Error types for storage operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while converting values to or from bytes.
///
/// Sources are boxed so that serializer implementations other than the
/// built-in JSON one can report their own error types.
#[derive(Debug, Error)]
pub enum SerializerError {
    /// Failed to encode a value into bytes.
    #[error("failed to encode value: {0}")]
    Encode(#[source] BoxError),

    /// Failed to decode a value from bytes.
    #[error("failed to decode value: {0}")]
    Decode(#[source] BoxError),
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file or folder name was empty or all whitespace.
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// The platform reports no per-user data directory.
    #[error("no local data directory available")]
    NoDataDir,

    /// File not found.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Folder not found or not a directory.
    #[error("folder not found: {path}")]
    FolderNotFound { path: PathBuf },

    /// The source stream contained no bytes.
    #[error("source stream is empty")]
    EmptyPayload,

    /// Failed to read from the file system.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write to the file system.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to create a directory.
    #[error("failed to create directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read the caller-supplied source stream.
    #[error("failed to read source stream: {0}")]
    Stream(#[source] io::Error),

    /// Serializer failure.
    #[error(transparent)]
    Serializer(#[from] SerializerError),
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
