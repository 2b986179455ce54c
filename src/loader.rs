use crate::*;

use std::path::Path as StdPath;

/// The files enumerated from one root container, ready to be applied to an
/// [`OverlayIndex`](struct.OverlayIndex.html). Paths are already normalized
/// and appear in enumeration order.
#[derive(Debug, Default)]
pub struct Container {
    pub files: Vec<(String, ContentLocator)>,
}

impl Container {
    pub fn len(&self) -> usize { self.files.len() }
    pub fn is_empty(&self) -> bool { self.files.is_empty() }
}

/// Enumerates a root container. A regular file is read as an archive, a
/// directory as a folder container. Anything else is rejected.
pub fn load(source: &StdPath) -> Result<Container> {
    // `metadata` follows symlinks, so a link to an archive is an archive
    match source.metadata() {
        Ok(meta) if meta.is_file() => archive::load(source),
        Ok(meta) if meta.is_dir() => fs::load(source),
        _ => Err(Error::InvalidSourcePath { path: source.to_owned() }),
    }
}
