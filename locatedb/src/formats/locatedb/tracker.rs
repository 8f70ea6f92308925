//! Tree state for the root currently being traversed

use std::sync::Arc;

use crate::formats::locatedb::directory::DirectoryRecord;
use crate::formats::locatedb::entry::{DirectoryEntry, FileEntry};
use crate::formats::locatedb::file::FileRecord;
use crate::formats::locatedb::root::RootEntry;

/// Ancestor stack of one open root. Depth is the number of open directories.
#[derive(Debug)]
pub(crate) struct TreeScope {
    root: Arc<RootEntry>,
    ancestors: Vec<Arc<DirectoryEntry>>,
    separator: char,
}

impl TreeScope {
    pub fn open(root: Arc<RootEntry>, separator: char) -> Self {
        Self { root, ancestors: Vec::with_capacity(32), separator }
    }

    pub fn root(&self) -> &Arc<RootEntry> {
        &self.root
    }

    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Path of the innermost open directory, or of the root
    pub fn current_path(&self) -> &str {
        match self.ancestors.last() {
            Some(dir) => dir.full_path(),
            None => self.root.full_path(),
        }
    }

    /// Annotate a directory record and make it the innermost open directory
    pub fn push_directory(&mut self, record: DirectoryRecord) -> Arc<DirectoryEntry> {
        let full_path = join_path(self.current_path(), &record.name, self.separator);
        let dir = Arc::new(DirectoryEntry {
            record,
            full_path,
            root: Arc::clone(&self.root),
            parent: self.ancestors.last().cloned(),
        });
        self.ancestors.push(Arc::clone(&dir));
        dir
    }

    /// Close the innermost open directory
    pub fn pop_directory(&mut self) -> Option<Arc<DirectoryEntry>> {
        self.ancestors.pop()
    }

    pub fn annotate_file(&self, record: FileRecord) -> FileEntry {
        FileEntry {
            full_path: join_path(self.current_path(), &record.name, self.separator),
            record,
            root: Arc::clone(&self.root),
            parent: self.ancestors.last().cloned(),
        }
    }
}

/// Join `name` under `base`, adding a separator only when `base` lacks one.
///
/// The check looks at the text, not the depth: a root path such as `I:\`
/// already ends with the separator, while a directory root such as `D:\Data`
/// still gets one before its first child.
pub(crate) fn join_path(base: &str, name: &str, separator: char) -> String {
    let mut path = String::with_capacity(base.len() + name.len() + 1);
    path.push_str(base);
    if !base.is_empty() && !base.ends_with(separator) {
        path.push(separator);
    }
    path.push_str(name);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filetime::PackedTime;
    use crate::formats::locatedb::constants::{EntryAttributes, RootKind};

    fn root(path: &str) -> Arc<RootEntry> {
        Arc::new(RootEntry {
            data_length: 1,
            kind: RootKind::Fixed,
            path: path.to_string(),
            volume_label: String::new(),
            volume_serial: 0,
            file_system: "NTFS".into(),
            file_count: 0,
            directory_count: 0,
        })
    }

    fn dir(name: &str) -> DirectoryRecord {
        DirectoryRecord {
            attributes: EntryAttributes::DIRECTORY,
            data_length: 0,
            name_length: name.len() as u8,
            name: name.into(),
            modified: PackedTime::default(),
            created: PackedTime::default(),
            accessed: PackedTime::default(),
        }
    }

    fn file(name: &str) -> FileRecord {
        FileRecord {
            attributes: EntryAttributes::FILE,
            name_length: name.len() as u8,
            extension_index: 0,
            name: name.into(),
            size: 0,
            modified: PackedTime::default(),
            created: PackedTime::default(),
            accessed: PackedTime::default(),
        }
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("I:\\", "Docs", '\\'), "I:\\Docs");
        assert_eq!(join_path("I:\\Docs", "a.txt", '\\'), "I:\\Docs\\a.txt");
        assert_eq!(join_path("C:\\Data", "x", '\\'), "C:\\Data\\x");
        assert_eq!(join_path("", "x", '\\'), "x");
        assert_eq!(join_path("/mnt", "x", '/'), "/mnt/x");
    }

    #[test]
    fn test_nested_paths_and_parents() {
        let mut scope = TreeScope::open(root("I:\\"), '\\');
        let top = scope.push_directory(dir("RootFolder1"));
        let sub = scope.push_directory(dir("Sub"));
        let leaf = scope.annotate_file(file("deep.txt"));

        assert_eq!(top.full_path(), "I:\\RootFolder1");
        assert!(top.parent().is_none());
        assert_eq!(sub.full_path(), "I:\\RootFolder1\\Sub");
        assert!(Arc::ptr_eq(sub.parent().unwrap(), &top));
        assert_eq!(leaf.full_path(), "I:\\RootFolder1\\Sub\\deep.txt");
        assert!(Arc::ptr_eq(leaf.parent().unwrap(), &sub));
        assert!(Arc::ptr_eq(leaf.root(), scope.root()));
        assert_eq!(scope.depth(), 2);
    }

    #[test]
    fn test_pop_restores_path() {
        let mut scope = TreeScope::open(root("I:\\"), '\\');
        scope.push_directory(dir("A"));
        scope.push_directory(dir("B"));

        assert_eq!(scope.pop_directory().unwrap().name(), "B");
        assert_eq!(scope.current_path(), "I:\\A");
        assert_eq!(scope.pop_directory().unwrap().name(), "A");
        assert_eq!(scope.current_path(), "I:\\");
        assert!(scope.pop_directory().is_none());
        assert_eq!(scope.depth(), 0);

        let file = scope.annotate_file(file("top.txt"));
        assert_eq!(file.full_path(), "I:\\top.txt");
        assert!(file.parent().is_none());
    }
}
