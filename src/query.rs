//! Read-only queries over an [`OverlayIndex`](../struct.OverlayIndex.html).
//!
//! Every function here takes raw, un-normalized paths as a caller would pass
//! them and returns paths in the index's own spelling, in index order.

use crate::*;

pub fn file_exists(index: &OverlayIndex, path: &str) -> bool {
    index.contains_file(&normalize(path))
}

pub fn folder_exists(index: &OverlayIndex, path: &str) -> bool {
    index.contains_folder(&normalize(&with_trailing_slash(path)))
}

pub fn lookup<'a>(index: &'a OverlayIndex, path: &str)
    -> Option<&'a ContentLocator> {
    index.lookup(&normalize(path))
}

/// Lists files under a folder. `""` and `"/"` name the root. Non-recursive
/// listings only include direct children.
///
/// Outside the root, only folders that directly contain a file are known.
/// Listing any other folder, even one with files further down, gives an
/// empty result.
pub fn files_in_folder(index: &OverlayIndex, path: &str, recursive: bool,
                       extension: Option<&str>) -> Vec<String> {
    let folder = with_trailing_slash(&normalize(path)).into_owned();
    let suffix = extension.map(|x| key(&format!(".{}", x)));
    let wanted = |k: &str| match &suffix {
        Some(suffix) => k.ends_with(suffix.as_str()),
        None => true,
    };
    if is_root(&folder) {
        index.keyed_entries()
            .filter(|(k, _)| recursive || !k.contains('/'))
            .filter(|(k, _)| wanted(*k))
            .map(|(_, path)| path.to_owned())
            .collect()
    }
    else if !index.contains_folder(&folder) {
        Vec::new()
    }
    else {
        let prefix = key(&folder);
        index.keyed_entries()
            .filter(|(k, _)| match k.strip_prefix(prefix.as_str()) {
                Some(rest) => recursive || !rest.contains('/'),
                None => false,
            })
            .filter(|(k, _)| wanted(*k))
            .map(|(_, path)| path.to_owned())
            .collect()
    }
}

/// Lists folders under a folder. `""` names the root; `"/"` is a folder like
/// any other, holding whatever was stored with a leading `/`. A non-recursive
/// listing only includes folders exactly one level down.
pub fn folders_in_folder(index: &OverlayIndex, path: &str, recursive: bool)
    -> Vec<String> {
    let normalized = normalize(path);
    let prefix = if normalized.is_empty() { String::new() }
    else { key(&with_trailing_slash(&normalized)) };
    index.keyed_folders()
        .filter(|(k, _)| match k.strip_prefix(prefix.as_str()) {
            Some("") | None => false,
            Some(_) if recursive => true,
            Some(rest) => rest.matches('/').count() == 1,
        })
        .map(|(_, path)| path.to_owned())
        .collect()
}
