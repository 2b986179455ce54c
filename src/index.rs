use crate::*;

use indexmap::IndexMap;

/// One file binding: the virtual path as first registered, and where its
/// content currently comes from.
#[derive(Clone, Debug)]
pub struct FileEntry {
    pub path: String,
    pub locator: ContentLocator,
}

/// The files and folders of everything added to an overlay so far.
///
/// Both maps are keyed by [`path::key`](path/fn.key.html), so every lookup is
/// case-insensitive, and both keep their insertion order. Nothing is ever
/// removed; inserting a path that is already present only replaces its
/// locator.
#[derive(Clone, Debug, Default)]
pub struct OverlayIndex {
    files: IndexMap<String, FileEntry>,
    folders: IndexMap<String, String>,
}

impl OverlayIndex {
    pub fn new() -> OverlayIndex {
        OverlayIndex::default()
    }
    /// Binds `path` to `locator`, replacing any previous binding for the same
    /// path. A replaced entry keeps its position and its original spelling.
    /// Returns the locator that was replaced, if any.
    ///
    /// Takes: a normalized path.
    pub fn insert(&mut self, path: &str, locator: ContentLocator)
        -> Option<ContentLocator> {
        match self.files.get_mut(&key(path)) {
            Some(entry) => Some(std::mem::replace(&mut entry.locator, locator)),
            None => {
                self.files.insert(key(path), FileEntry {
                    path: path.to_owned(),
                    locator,
                });
                None
            },
        }
    }
    /// Takes: a normalized path.
    pub fn lookup(&self, path: &str) -> Option<&ContentLocator> {
        self.files.get(&key(path)).map(|x| &x.locator)
    }
    /// Records a folder. Registering the same folder twice, in any casing, is
    /// a no-op.
    ///
    /// Takes: a normalized path ending in `/`.
    pub fn register_folder(&mut self, path: &str) {
        debug_assert!(path.ends_with('/'));
        self.folders.entry(key(path)).or_insert_with(|| path.to_owned());
    }
    /// Binds a file and registers its immediate parent folder. Only the
    /// immediate parent is registered, never the ancestors above it.
    pub fn bind(&mut self, path: &str, locator: ContentLocator)
        -> Option<ContentLocator> {
        let replaced = self.insert(path, locator);
        if let Some(parent) = parent_folder(path) {
            self.register_folder(parent);
        }
        replaced
    }
    /// Binds every file of a loaded container, in order.
    pub fn apply(&mut self, container: Container) {
        for (path, locator) in container.files {
            if let Some(old) = self.bind(&path, locator) {
                log::trace!("{:?} overrides {}", path, old.describe());
            }
        }
    }
    pub fn contains_file(&self, path: &str) -> bool {
        self.files.contains_key(&key(path))
    }
    /// Takes: a normalized path ending in `/`.
    pub fn contains_folder(&self, path: &str) -> bool {
        self.folders.contains_key(&key(path))
    }
    /// All file bindings, in insertion order.
    pub fn files(&self) -> impl Iterator<Item=&FileEntry> {
        self.files.values()
    }
    /// All file paths, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item=&str> {
        self.files.values().map(|x| x.path.as_str())
    }
    /// All folder paths, in insertion order. Each ends with `/`.
    pub fn folders(&self) -> impl Iterator<Item=&str> {
        self.folders.values().map(String::as_str)
    }
    pub(crate) fn keyed_entries(&self)
        -> impl Iterator<Item=(&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.path.as_str()))
    }
    pub(crate) fn keyed_folders(&self)
        -> impl Iterator<Item=(&str, &str)> {
        self.folders.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
    pub fn len(&self) -> usize { self.files.len() }
    pub fn is_empty(&self) -> bool { self.files.is_empty() }
}
