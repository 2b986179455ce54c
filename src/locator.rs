use std::{
    fmt,
    fs::{self, File},
    io::{self, Cursor, Read, Seek},
    path::{Path as StdPath, PathBuf as StdPathBuf},
    sync::Arc,
};
use parking_lot::Mutex;
use zip::ZipArchive;

/// A readable, seekable stream of file content, as handed out by
/// [`Overlay::get_file_stream`](struct.Overlay.html#method.get_file_stream).
pub trait DataFile : Read + Seek {}
impl<T: AsRef<[u8]>> DataFile for Cursor<T> {}
impl DataFile for File {}

/// An open archive, shared by every locator that was loaded from it. The
/// archive stays open until the last of those locators is dropped.
pub struct ArchiveHandle {
    path: StdPathBuf,
    archive: Mutex<ZipArchive<File>>,
}

impl ArchiveHandle {
    pub(crate) fn new(path: StdPathBuf, archive: ZipArchive<File>)
        -> ArchiveHandle {
        ArchiveHandle { path, archive: Mutex::new(archive) }
    }
    /// The filesystem path the archive was opened from.
    pub fn path(&self) -> &StdPath { &self.path }
    /// Decompresses one entry, by its original in-archive name, into memory.
    pub fn read_entry(&self, entry_name: &str) -> io::Result<Vec<u8>> {
        let mut archive = self.archive.lock();
        let mut entry = archive.by_name(entry_name)?;
        // the stored size is a hint only, don't trust it with an allocation
        let mut buf = Vec::with_capacity(entry.size().min(1 << 20) as usize);
        entry.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl fmt::Debug for ArchiveHandle {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "ArchiveHandle({:?})", self.path)
    }
}

/// Where the bytes of a file physically live.
#[derive(Clone, Debug)]
pub enum ContentLocator {
    /// A regular file inside a directory container.
    DirectoryFile {
        path: StdPathBuf,
    },
    /// An entry inside an archive container. `entry_name` is the entry's
    /// name exactly as the archive stores it, before normalization.
    ArchiveEntry {
        archive: Arc<ArchiveHandle>,
        entry_name: String,
    },
}

impl ContentLocator {
    /// Opens the backing content for reading. Archive entries are
    /// decompressed up front; directory files are streamed.
    pub fn open(&self) -> io::Result<Box<dyn DataFile>> {
        match self {
            ContentLocator::DirectoryFile { path } =>
                File::open(path).map(|x| -> Box<dyn DataFile> { Box::new(x) }),
            ContentLocator::ArchiveEntry { archive, entry_name } =>
                archive.read_entry(entry_name)
                    .map(|x| -> Box<dyn DataFile> { Box::new(Cursor::new(x)) }),
        }
    }
    /// Reads the entire backing content into memory.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        match self {
            ContentLocator::DirectoryFile { path } => fs::read(path),
            ContentLocator::ArchiveEntry { archive, entry_name } =>
                archive.read_entry(entry_name),
        }
    }
    /// Describes the physical source, for log messages.
    pub fn describe(&self) -> String {
        match self {
            ContentLocator::DirectoryFile { path } =>
                format!("{}", path.display()),
            ContentLocator::ArchiveEntry { archive, entry_name } =>
                format!("{}!{}", archive.path().display(), entry_name),
        }
    }
}
