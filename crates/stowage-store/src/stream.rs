//! Raw byte-stream transfer between callers and the storage backend.
//!
//! Writes are staged: the payload is copied into a temp file in the
//! destination directory, flushed, then renamed over the target. A failed
//! write therefore never leaves a partial or empty destination file.

use std::io::{self, SeekFrom};

use tempfile::NamedTempFile;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeek, AsyncSeekExt, AsyncWriteExt};
use tokio::task;

use crate::error::{Result, StoreError};
use crate::folder::{valid_name, Folder};

/// Copies a seekable byte stream into a named file, replacing any existing
/// file of that name. Returns the number of bytes written.
///
/// The source is rewound to its start before copying, so a stream that was
/// just filled can be handed over as-is.
///
/// # Errors
/// Returns `EmptyPayload` for a zero-length source (nothing is written),
/// `InvalidName` for a blank file name, and `Write` for backend failures.
pub async fn write_stream<R>(folder: &Folder, file_name: &str, mut data: R) -> Result<u64>
where
    R: AsyncRead + AsyncSeek + Unpin,
{
    let file_name = valid_name(file_name)?;

    let len = data
        .seek(SeekFrom::End(0))
        .await
        .map_err(StoreError::Stream)?;
    if len == 0 {
        return Err(StoreError::EmptyPayload);
    }
    data.rewind().await.map_err(StoreError::Stream)?;

    let dest = folder.file_path(file_name);

    // Stage in the destination directory so the final rename stays on one
    // filesystem.
    let dir = folder.path().to_path_buf();
    let staged = task::spawn_blocking(move || NamedTempFile::new_in(dir))
        .await
        .map_err(|e| StoreError::Write {
            path: dest.clone(),
            source: io::Error::new(io::ErrorKind::Other, e),
        })?
        .map_err(|source| StoreError::Write {
            path: dest.clone(),
            source,
        })?;
    let (staged_file, staged_path) = staged.into_parts();

    let mut sink = File::from_std(staged_file);
    let written = tokio::io::copy(&mut data, &mut sink)
        .await
        .map_err(|source| StoreError::Write {
            path: dest.clone(),
            source,
        })?;
    sink.flush().await.map_err(|source| StoreError::Write {
        path: dest.clone(),
        source,
    })?;
    drop(sink);

    let target = dest.clone();
    task::spawn_blocking(move || staged_path.persist(target))
        .await
        .map_err(|e| StoreError::Write {
            path: dest.clone(),
            source: io::Error::new(io::ErrorKind::Other, e),
        })?
        .map_err(|e| StoreError::Write {
            path: dest,
            source: e.error,
        })?;

    Ok(written)
}

/// Opens a named file for sequential reading.
///
/// # Errors
/// Returns `NotFound` if the file does not exist.
pub async fn open_read(folder: &Folder, file_name: &str) -> Result<File> {
    let file_name = valid_name(file_name)?;
    let path = folder.file_path(file_name);
    File::open(&path).await.map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound { path: path.clone() },
        _ => StoreError::Read {
            path: path.clone(),
            source,
        },
    })
}

/// Reads the full contents of a named file.
pub async fn read_to_end(folder: &Folder, file_name: &str) -> Result<Vec<u8>> {
    let mut file = open_read(folder, file_name).await?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .await
        .map_err(|source| StoreError::Read {
            path: folder.file_path(file_name),
            source,
        })?;
    Ok(bytes)
}
