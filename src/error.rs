use std::{
    io,
    path::PathBuf as StdPathBuf,
};
use thiserror::Error;

/// Everything that can go wrong while building or reading an
/// [`Overlay`](struct.Overlay.html).
#[derive(Debug, Error)]
pub enum Error {
    /// The source handed to `add_root_container` is neither an existing file
    /// nor an existing directory.
    #[error("{path:?} is neither a file nor a directory")]
    InvalidSourcePath {
        path: StdPathBuf,
    },
    /// The source exists, but could not be read as a container. For an
    /// archive this means it could not be opened or parsed; for a directory,
    /// that walking it failed.
    #[error("{path:?} could not be loaded as a container: {source}")]
    InvalidContainer {
        path: StdPathBuf,
        #[source]
        source: ContainerError,
    },
    /// No file is bound at the given virtual path.
    #[error("no file at virtual path {path:?}")]
    FileNotFound {
        path: String,
    },
    /// A file is bound at the given virtual path, but its backing content
    /// could not be opened. This only happens if a loaded container was
    /// changed behind our back.
    #[error("backing content for {path:?} could not be opened: {source}")]
    ProviderError {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a [`FileNotFound`](#variant.FileNotFound).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::FileNotFound { .. })
    }
    /// Returns `true` if this is an
    /// [`InvalidContainer`](#variant.InvalidContainer).
    pub fn is_invalid_container(&self) -> bool {
        matches!(self, Error::InvalidContainer { .. })
    }
}

/// The underlying reason a container failed to load.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
