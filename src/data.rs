//! Asynchronous reads, for hosts that live inside a Tokio runtime.

use crate::*;

use std::{
    io::{self, Cursor},
    marker::Unpin,
};
use tokio::{
    fs::File,
    io::{AsyncRead, AsyncReadExt, AsyncSeek},
};

/// The asynchronous counterpart of [`DataFile`](trait.DataFile.html).
pub trait AsyncDataFile : AsyncRead + AsyncSeek + Unpin + Send {}
impl<T: AsRef<[u8]> + Unpin + Send> AsyncDataFile for Cursor<T> {}
impl AsyncDataFile for File {}

async fn open_locator(locator: ContentLocator)
    -> io::Result<Box<dyn AsyncDataFile>> {
    match locator {
        ContentLocator::DirectoryFile { path } =>
            File::open(path).await
                .map(|x| -> Box<dyn AsyncDataFile> { Box::new(x) }),
        ContentLocator::ArchiveEntry { archive, entry_name } => {
            // decompression is blocking work
            let data = tokio::task::spawn_blocking(move || {
                archive.read_entry(&entry_name)
            }).await.map_err(io::Error::other)??;
            Ok(Box::new(Cursor::new(data)))
        },
    }
}

impl Overlay {
    /// As [`get_file_stream`](#method.get_file_stream), without blocking the
    /// runtime. Must be called from within a Tokio runtime.
    pub async fn get_file_stream_async(&self, path: &str)
        -> Result<Box<dyn AsyncDataFile>> {
        let locator = self.locate(path)?;
        open_locator(locator).await
            .map_err(|source| Error::ProviderError {
                path: path.to_owned(),
                source,
            })
    }
    /// As [`get_file_contents`](#method.get_file_contents), without blocking
    /// the runtime. Must be called from within a Tokio runtime.
    pub async fn get_file_contents_async(&self, path: &str)
        -> Result<Vec<u8>> {
        let mut file = self.get_file_stream_async(path).await?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).await
            .map_err(|source| Error::ProviderError {
                path: path.to_owned(),
                source,
            })?;
        Ok(buf)
    }
}
