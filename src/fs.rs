use crate::*;

use std::path::Path as StdPath;
use walkdir::WalkDir;

fn invalid(root: &StdPath, x: impl Into<ContainerError>) -> Error {
    Error::InvalidContainer { path: root.to_owned(), source: x.into() }
}

/// Enumerates every regular file below `root`, recursively. Each file is
/// bound at its path relative to `root`.
// TODO: case-sensitive filesystems can hold two files that differ only in
// case; the one that sorts later silently wins. Worth a warning.
pub(crate) fn load(root: &StdPath) -> Result<Container> {
    let mut container = Container::default();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|x| invalid(root, x))?;
        if !entry.file_type().is_file() { continue }
        let relative = match entry.path().strip_prefix(root) {
            Ok(x) => x,
            // walkdir only yields paths under the root it was given
            Err(_) => continue,
        };
        let relative = match relative.to_str() {
            Some(x) => x,
            None => {
                log::warn!("{:?}: skipping file with a non-UTF-8 name",
                           entry.path());
                continue
            },
        };
        let path = normalize(relative).into_owned();
        let locator = ContentLocator::DirectoryFile {
            path: entry.into_path(),
        };
        container.files.push((path, locator));
    }
    log::debug!("{:?}: directory container, {} files", root, container.len());
    Ok(container)
}
