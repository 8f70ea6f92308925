//! Entry filters consulted by the reader before an entry is returned

use bitflags::bitflags;

use crate::formats::locatedb::entry::Entry;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FilterAction: u8 {
        /// Do not return the entry itself
        const EXCLUDE_SELF     = 0x01;
        /// Skip the entry's subtree. Ignored for files.
        const EXCLUDE_CHILDREN = 0x02;
    }
}

impl FilterAction {
    pub const INCLUDE: FilterAction = FilterAction::empty();
}

pub trait EntryFilter {
    fn filter(&mut self, entry: &Entry) -> FilterAction;
}

impl<F> EntryFilter for F
where
    F: FnMut(&Entry) -> FilterAction,
{
    fn filter(&mut self, entry: &Entry) -> FilterAction {
        self(entry)
    }
}

/// Prunes the subtrees of roots and directories whose full path matches one
/// of the configured paths. The matching entry itself is still returned.
#[derive(Debug, Clone, Default)]
pub struct PathPrefixFilter {
    prefixes: Vec<String>,
    case_sensitive: bool,
}

impl PathPrefixFilter {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { prefixes: prefixes.into_iter().map(Into::into).collect(), case_sensitive: false }
    }

    /// Compare paths case-sensitively. Windows paths are matched
    /// case-insensitively by default.
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            let prefix = prefix.trim_end_matches(['\\', '/']);
            let path = path.trim_end_matches(['\\', '/']);
            if self.case_sensitive {
                prefix == path
            } else {
                prefix.to_lowercase() == path.to_lowercase()
            }
        })
    }
}

impl EntryFilter for PathPrefixFilter {
    fn filter(&mut self, entry: &Entry) -> FilterAction {
        match entry {
            Entry::Root(_) | Entry::Directory(_) => match entry.full_path() {
                Some(path) if self.matches(path) => FilterAction::EXCLUDE_CHILDREN,
                _ => FilterAction::INCLUDE,
            },
            _ => FilterAction::INCLUDE,
        }
    }
}
