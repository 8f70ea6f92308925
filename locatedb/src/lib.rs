//! locatedb - reader for Locate32 LOCATEDB index archives
//!
//! The archive is decoded one entry at a time by [`LocateDbReader`], which can
//! skip whole subtrees without decoding them.
//!
//! ```no_run
//! use std::fs::File;
//! use locatedb::{Entry, LocateDbReader};
//!
//! # fn main() -> locatedb::Result<()> {
//! let mut reader = LocateDbReader::new(File::open("files.dbs")?)?;
//! while let Some(entry) = reader.read_next()? {
//!     if let Entry::Directory(dir) = &entry {
//!         if dir.name() == "node_modules" {
//!             reader.skip_children()?;
//!         }
//!     }
//!     if let Some(path) = entry.full_path() {
//!         println!("{}", path);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod formats;

pub use crate::core::dword::{split_dword, DWord};
pub use crate::core::error::{ArchiveError, Result};
pub use crate::core::filetime::PackedTime;
pub use crate::core::format::{detect_archive_format, ArchiveFormat};
pub use crate::formats::locatedb::constants::{ArchiveFlags, EntryAttributes, RootKind};
pub use crate::formats::locatedb::directory::DirectoryRecord;
pub use crate::formats::locatedb::entry::{DirectoryEntry, Entry, EntryKind, FileEntry};
pub use crate::formats::locatedb::file::FileRecord;
pub use crate::formats::locatedb::filter::{EntryFilter, FilterAction, PathPrefixFilter};
pub use crate::formats::locatedb::header::Header;
pub use crate::formats::locatedb::reader::{Entries, LocateDbReader, ReaderSettings};
pub use crate::formats::locatedb::root::RootEntry;
