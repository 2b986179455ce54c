use crate::*;

use std::{
    path::Path as StdPath,
    sync::Arc,
};
use parking_lot::RwLock;

#[cfg(feature = "stdpaths")]
mod stdpaths;

/// A read-only overlay of root containers.
///
/// Cloning an `Overlay` is cheap, and every clone shares the same index, so
/// containers added through one clone are visible through all of them.
/// Queries can run concurrently with each other; adding a container waits
/// for them to finish.
#[derive(Clone, Debug, Default)]
pub struct Overlay {
    inner: Arc<RwLock<OverlayIndex>>,
}

impl Overlay {
    pub fn new() -> Overlay {
        Overlay::default()
    }
    /// Adds a root container on top of everything added so far. Any file in
    /// the new container replaces a file already present at the same virtual
    /// path.
    ///
    /// Takes: the path of a directory, or of a ZIP archive.
    ///
    /// The container is enumerated in full before anything is added, so if
    /// this fails, the overlay is unchanged.
    pub fn add_root_container(&mut self, source: impl AsRef<StdPath>)
        -> Result<()> {
        let container = loader::load(source.as_ref())?;
        let mut this = self.inner.write();
        this.apply(container);
        log::debug!("{:?} added, overlay now holds {} files",
                    source.as_ref(), this.len());
        Ok(())
    }
    pub fn file_exists(&self, path: &str) -> bool {
        query::file_exists(&self.inner.read(), path)
    }
    pub fn folder_exists(&self, path: &str) -> bool {
        query::folder_exists(&self.inner.read(), path)
    }
    /// Returns the locator currently bound at a virtual path.
    pub fn locate(&self, path: &str) -> Result<ContentLocator> {
        let this = self.inner.read();
        match query::lookup(&this, path) {
            Some(x) => Ok(x.clone()),
            None => Err(Error::FileNotFound { path: path.to_owned() }),
        }
    }
    /// Opens a file for reading.
    pub fn get_file_stream(&self, path: &str) -> Result<Box<dyn DataFile>> {
        // the lock is released before any I/O happens
        self.locate(path)?.open()
            .map_err(|source| Error::ProviderError {
                path: path.to_owned(),
                source,
            })
    }
    /// Reads an entire file into memory.
    pub fn get_file_contents(&self, path: &str) -> Result<Vec<u8>> {
        self.locate(path)?.read()
            .map_err(|source| Error::ProviderError {
                path: path.to_owned(),
                source,
            })
    }
    /// Reads an entire file as UTF-8 text.
    pub fn get_file_contents_as_text(&self, path: &str) -> Result<String> {
        self.get_file_contents_as_text_with_encoding(path,
                                                     TextEncoding::Utf8)
    }
    pub fn get_file_contents_as_text_with_encoding(&self, path: &str,
                                                   encoding: TextEncoding)
        -> Result<String> {
        self.get_file_contents(path).map(|x| encoding.decode(&x))
    }
    /// Every file path in the overlay.
    pub fn entries(&self) -> Vec<String> {
        self.inner.read().entries().map(str::to_owned).collect()
    }
    /// Every known folder path. Only folders that directly contain at least
    /// one file are known.
    pub fn folders(&self) -> Vec<String> {
        self.inner.read().folders().map(str::to_owned).collect()
    }
    pub fn get_files_in_folder(&self, path: &str, recursive: bool)
        -> Vec<String> {
        query::files_in_folder(&self.inner.read(), path, recursive, None)
    }
    /// As [`get_files_in_folder`](#method.get_files_in_folder), keeping only
    /// files with the given extension. The extension is given without its
    /// leading `.` and is matched without regard to case.
    pub fn get_files_in_folder_with_extension(&self, path: &str,
                                              extension: &str,
                                              recursive: bool)
        -> Vec<String> {
        query::files_in_folder(&self.inner.read(), path, recursive,
                               Some(extension))
    }
    pub fn get_folders_in_folder(&self, path: &str, recursive: bool)
        -> Vec<String> {
        query::folders_in_folder(&self.inner.read(), path, recursive)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::archive::test::write_zip;
    use std::{fs, io::Read, path::Path as StdPath};

    /// Lays out a directory tree holding the given files.
    fn write_dir(root: &StdPath, listing: &[(&str, &[u8])]) {
        for (name, data) in listing {
            let path = root.join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, data).unwrap();
        }
    }

    #[test] fn override_follows_load_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        write_dir(&a, &[("p.txt", b"from A"), ("only_a.txt", b"A")]);
        write_dir(&b, &[("P.TXT", b"from B")]);
        let mut ab = Overlay::new();
        ab.add_root_container(&a).unwrap();
        ab.add_root_container(&b).unwrap();
        assert_eq!(ab.get_file_contents("p.txt").unwrap(), b"from B");
        assert_eq!(ab.get_file_contents("only_a.txt").unwrap(), b"A");
        let mut ba = Overlay::new();
        ba.add_root_container(&b).unwrap();
        ba.add_root_container(&a).unwrap();
        assert_eq!(ba.get_file_contents("P.txt").unwrap(), b"from A");
    }
    #[test] fn directories_and_archives_mix() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("base");
        let patch = dir.path().join("patch.zip");
        write_dir(&base, &[
            ("Data/Subdir/Pi", b"3"),
            ("Data/freq", b"456"),
        ]);
        write_zip(&patch, &[
            ("Data/", b""),
            ("Data/Subdir/Pi", b"3.1415 etc."),
            ("Data/Subdir/lipsum", b"Lorem ipsum dolor sit amet?"),
        ]);
        let mut overlay = Overlay::new();
        overlay.add_root_container(&base).unwrap();
        overlay.add_root_container(&patch).unwrap();
        assert_eq!(overlay.get_file_contents("data/subdir/pi").unwrap(),
                   b"3.1415 etc.");
        assert_eq!(overlay.get_file_contents_as_text("Data/freq").unwrap(),
                   "456");
        let mut stream = overlay.get_file_stream("Data/Subdir/lipsum").unwrap();
        let mut buf = String::new();
        stream.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "Lorem ipsum dolor sit amet?");
        // overridden entries keep their place
        assert_eq!(overlay.entries(),
                   &["Data/Subdir/Pi", "Data/freq", "Data/Subdir/lipsum"]);
        assert_eq!(overlay.folders(), &["Data/Subdir/", "Data/"]);
        // and the other way around
        let mut overlay = Overlay::new();
        overlay.add_root_container(&patch).unwrap();
        overlay.add_root_container(&base).unwrap();
        assert_eq!(overlay.get_file_contents("Data/Subdir/Pi").unwrap(), b"3");
    }
    #[test] fn listings() {
        let dir = tempfile::tempdir().unwrap();
        write_dir(dir.path(), &[
            ("file1.txt", b"1"),
            ("file2.txt", b"2"),
            ("notes.md", b"#"),
            ("folder/file3.txt", b"3"),
        ]);
        let mut overlay = Overlay::new();
        overlay.add_root_container(dir.path()).unwrap();
        let mut flat = overlay.get_files_in_folder("", false);
        flat.sort();
        assert_eq!(flat, &["file1.txt", "file2.txt", "notes.md"]);
        assert_eq!(overlay.get_files_in_folder("", true).len(), 4);
        let mut txt = overlay.get_files_in_folder_with_extension("", "TXT",
                                                                 true);
        txt.sort();
        assert_eq!(txt, &["file1.txt", "file2.txt", "folder/file3.txt"]);
        assert_eq!(overlay.get_files_in_folder("Folder", false),
                   &["folder/file3.txt"]);
        assert!(overlay.get_files_in_folder("nope/", false).is_empty());
        assert_eq!(overlay.get_folders_in_folder("", false), &["folder/"]);
    }
    #[test] fn folder_locality() {
        let dir = tempfile::tempdir().unwrap();
        write_dir(dir.path(), &[("a/b/c.txt", b"")]);
        let mut overlay = Overlay::new();
        overlay.add_root_container(dir.path()).unwrap();
        assert!(!overlay.folder_exists("a"));
        assert!(overlay.folder_exists("a/b"));
        assert!(overlay.folder_exists("A/B/"));
    }
    #[test] fn missing_file() {
        let overlay = Overlay::new();
        match overlay.get_file_contents("missing.txt") {
            Err(x) => assert!(x.is_not_found(), "{}", x),
            Ok(_) => panic!("read a file from an empty overlay"),
        }
        assert!(overlay.get_file_stream("missing.txt").is_err());
        assert!(!overlay.file_exists("missing.txt"));
    }
    #[test] fn invalid_sources() {
        let dir = tempfile::tempdir().unwrap();
        let mut overlay = Overlay::new();
        match overlay.add_root_container(dir.path().join("does/not/exist")) {
            Err(Error::InvalidSourcePath { .. }) => (),
            x => panic!("expected InvalidSourcePath, got {:?}", x),
        }
        let broken = dir.path().join("broken.zip");
        fs::write(&broken, b"PK but not really").unwrap();
        match overlay.add_root_container(&broken) {
            Err(Error::InvalidContainer { .. }) => (),
            x => panic!("expected InvalidContainer, got {:?}", x),
        }
        assert!(overlay.entries().is_empty());
        assert!(overlay.folders().is_empty());
    }
    #[test] fn vanished_backing_file() {
        let dir = tempfile::tempdir().unwrap();
        write_dir(dir.path(), &[("gone.txt", b"soon")]);
        let mut overlay = Overlay::new();
        overlay.add_root_container(dir.path()).unwrap();
        fs::remove_file(dir.path().join("gone.txt")).unwrap();
        assert!(overlay.file_exists("gone.txt"));
        match overlay.get_file_contents("gone.txt") {
            Err(Error::ProviderError { path, .. }) =>
                assert_eq!(path, "gone.txt"),
            x => panic!("expected ProviderError, got {:?}", x),
        }
    }
    #[test] fn clones_share_an_index() {
        let dir = tempfile::tempdir().unwrap();
        write_dir(dir.path(), &[("shared", b"yes")]);
        let overlay = Overlay::new();
        let mut writer = overlay.clone();
        writer.add_root_container(dir.path()).unwrap();
        assert!(overlay.file_exists("SHARED"));
    }
    #[test] fn text_encodings() {
        let dir = tempfile::tempdir().unwrap();
        write_dir(dir.path(), &[("utf16.txt", b"\xFF\xFEo\x00k\x00")]);
        let mut overlay = Overlay::new();
        overlay.add_root_container(dir.path()).unwrap();
        assert_eq!(overlay.get_file_contents_as_text_with_encoding(
            "utf16.txt", TextEncoding::Utf16Le).unwrap(), "ok");
    }
}
