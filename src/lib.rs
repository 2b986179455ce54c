//! This is a read-only overlay filesystem, intended for games and other
//! applications that ship base content and accept mods. It layers any number
//! of "root containers" (plain directories and ZIP archives) into one
//! namespace. Whoever asks for a file never needs to know which container it
//! actually came from.
//!
//! # Overview
//!
//! ```no_run
//! # use overlay_vfs::Overlay;
//! # fn main() -> overlay_vfs::Result<()> {
//! let mut overlay = Overlay::new();
//! overlay.add_root_container("Data")?;
//! overlay.add_root_container("Mods/HighResSky.zip")?;
//! let sky = overlay.get_file_contents("Textures/Sky.dds")?;
//! for script in overlay.get_files_in_folder_with_extension("Scripts", "lua",
//!                                                          true) {
//!     println!("{}", script);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Paths
//!
//! Virtual paths are plain strings that use `/` as a separator, with no
//! leading `/`. Backslashes are accepted everywhere and treated as `/`.
//! Paths are compared without regard to case, so `Textures/Sky.dds` and
//! `textures/sky.DDS` are the same file. Other than that, paths are taken
//! exactly as given: nothing trims doubled slashes, and `.` and `..` are
//! ordinary names. See [`normalize`](fn.normalize.html).
//!
//! ## Overrides
//!
//! Every container is added on top of all the ones before it. If two
//! containers have a file at the same path, the later one wins. Nothing is
//! merged; the earlier file simply stops being visible.
//!
//! Given tree A:
//!
//! - `bar/baz`
//! - `foo`
//!
//! And tree B:
//!
//! - `bar/bang`
//! - `FOO`
//!
//! Adding A and then B gives:
//!
//! - `bar/bang` (sourced from B)
//! - `bar/baz` (sourced from A)
//! - `foo` (sourced from B, but still spelled as A spelled it)
//!
//! ## Folders
//!
//! Folders are not stored anywhere; they are derived from the files. A
//! folder is known if and only if at least one file lives *directly* inside
//! it. If the only file in the overlay is `a/b/c.txt`, then `a/b/` exists but
//! `a/` does not, and listing `a/` gives nothing at all.
//!
//! ## Features
//!
//! - `stdpaths` (default): [`Overlay::with_standard_paths`] and
//!   [`Overlay::add_root_containers_in`].
//! - `async`: Tokio-friendly versions of the read operations.

pub mod path;
pub use path::normalize;
use path::{key, parent_folder, with_trailing_slash, is_root};

mod error;
pub use error::{Error, ContainerError, Result};

mod locator;
pub use locator::{ArchiveHandle, ContentLocator, DataFile};

mod index;
pub use index::{FileEntry, OverlayIndex};

mod loader;
pub use loader::Container;

mod fs;
mod archive;

pub mod query;

mod text;
pub use text::TextEncoding;

mod vfs;
pub use vfs::*;

#[cfg(feature = "async")]
mod data;
#[cfg(feature = "async")]
pub use data::AsyncDataFile;
