//! Entry values handed to callers
//!
//! Records decoded by the codecs are annotated by the tree tracker with their
//! owning root, parent directory and full path before they are emitted.
//! Back-references are shared read-only handles that only point upward, so
//! holding an entry never keeps its descendants alive.

use std::sync::Arc;

use crate::formats::locatedb::directory::DirectoryRecord;
use crate::formats::locatedb::file::FileRecord;
use crate::formats::locatedb::header::Header;
use crate::formats::locatedb::root::RootEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Header,
    Root,
    Directory,
    File,
}

#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub(crate) record: DirectoryRecord,
    pub(crate) full_path: String,
    pub(crate) root: Arc<RootEntry>,
    pub(crate) parent: Option<Arc<DirectoryEntry>>,
}

impl DirectoryEntry {
    pub fn record(&self) -> &DirectoryRecord {
        &self.record
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn root(&self) -> &Arc<RootEntry> {
        &self.root
    }

    /// Enclosing directory, `None` directly under the root
    pub fn parent(&self) -> Option<&Arc<DirectoryEntry>> {
        self.parent.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct FileEntry {
    pub(crate) record: FileRecord,
    pub(crate) full_path: String,
    pub(crate) root: Arc<RootEntry>,
    pub(crate) parent: Option<Arc<DirectoryEntry>>,
}

impl FileEntry {
    pub fn record(&self) -> &FileRecord {
        &self.record
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn size(&self) -> u64 {
        self.record.size
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn root(&self) -> &Arc<RootEntry> {
        &self.root
    }

    pub fn parent(&self) -> Option<&Arc<DirectoryEntry>> {
        self.parent.as_ref()
    }
}

/// One logical record of the archive
#[derive(Debug, Clone)]
pub enum Entry {
    Header(Header),
    Root(Arc<RootEntry>),
    Directory(Arc<DirectoryEntry>),
    File(FileEntry),
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Header(_) => EntryKind::Header,
            Entry::Root(_) => EntryKind::Root,
            Entry::Directory(_) => EntryKind::Directory,
            Entry::File(_) => EntryKind::File,
        }
    }

    /// Full path of roots, directories and files. Headers have none.
    pub fn full_path(&self) -> Option<&str> {
        match self {
            Entry::Header(_) => None,
            Entry::Root(root) => Some(root.full_path()),
            Entry::Directory(dir) => Some(dir.full_path()),
            Entry::File(file) => Some(file.full_path()),
        }
    }

    pub fn as_header(&self) -> Option<&Header> {
        match self {
            Entry::Header(header) => Some(header),
            _ => None,
        }
    }

    pub fn as_root(&self) -> Option<&Arc<RootEntry>> {
        match self {
            Entry::Root(root) => Some(root),
            _ => None,
        }
    }

    pub fn as_directory(&self) -> Option<&Arc<DirectoryEntry>> {
        match self {
            Entry::Directory(dir) => Some(dir),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileEntry> {
        match self {
            Entry::File(file) => Some(file),
            _ => None,
        }
    }
}
