use crate::*;

use std::{
    fs::File,
    path::Path as StdPath,
    sync::Arc,
};
use zip::ZipArchive;

fn invalid(path: &StdPath, x: impl Into<ContainerError>) -> Error {
    Error::InvalidContainer { path: path.to_owned(), source: x.into() }
}

/// Opens a ZIP archive and enumerates its entries. Directory entries (names
/// ending in `/`) are skipped. Every file is bound at its normalized entry
/// name, and every locator shares the one open handle.
pub(crate) fn load(path: &StdPath) -> Result<Container> {
    let file = File::open(path).map_err(|x| invalid(path, x))?;
    let mut archive = ZipArchive::new(file).map_err(|x| invalid(path, x))?;
    let mut names = Vec::with_capacity(archive.len());
    for i in 0 .. archive.len() {
        // raw access reads the header only; nothing gets decompressed here
        let entry = archive.by_index_raw(i).map_err(|x| invalid(path, x))?;
        let name = entry.name();
        if name.ends_with('/') { continue }
        names.push(name.to_owned());
    }
    let handle = Arc::new(ArchiveHandle::new(path.to_owned(), archive));
    let container = Container {
        files: names.into_iter().map(|entry_name| {
            let path = normalize(&entry_name).into_owned();
            (path, ContentLocator::ArchiveEntry {
                archive: handle.clone(),
                entry_name,
            })
        }).collect(),
    };
    log::debug!("{:?}: archive container, {} files", path, container.len());
    Ok(container)
}
