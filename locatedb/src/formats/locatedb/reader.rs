//! Incremental LOCATEDB reader
//!
//! Each call to [`LocateDbReader::read_next`] decodes exactly one header, root,
//! directory or file entry. All traversal state lives in the reader, so a
//! traversal can be paused between calls and resumed later. Subtrees can be
//! skipped without decoding them by seeking past their declared length.

use std::io::{Read, Seek, SeekFrom};
use std::iter::FusedIterator;
use std::mem;
use std::sync::Arc;

use log::{debug, trace};

use crate::core::error::{ArchiveError, Result};
use crate::formats::locatedb::constants::{EntryAttributes, ROOT_LENGTH_FIELD_SIZE};
use crate::formats::locatedb::directory::DirectoryRecord;
use crate::formats::locatedb::entry::Entry;
use crate::formats::locatedb::file::FileRecord;
use crate::formats::locatedb::filter::{EntryFilter, FilterAction};
use crate::formats::locatedb::header::Header;
use crate::formats::locatedb::root::RootEntry;
use crate::formats::locatedb::tracker::TreeScope;
use crate::formats::locatedb::utils::FixedSize;

const CLOSED: ArchiveError = ArchiveError::InvalidUsage("reader is closed");
const NOTHING_TO_SKIP: ArchiveError =
    ArchiveError::InvalidUsage("skip_children must directly follow a root or directory entry");

/// Options fixed when a [`LocateDbReader`] is created
#[derive(Debug, Clone)]
pub struct ReaderSettings {
    /// Hand the stream back from [`LocateDbReader::close`] instead of dropping it
    pub leave_open: bool,
    /// Separator used to build full paths
    pub separator: char,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self { leave_open: false, separator: '\\' }
    }
}

#[derive(Debug)]
enum Phase {
    AwaitHeader,
    AwaitRoot,
    AwaitEntry(TreeScope),
    Done,
    Failed,
    Closed,
}

/// Where the last returned root or directory started, for skipping its subtree
#[derive(Debug, Clone, Copy)]
enum SkipTarget {
    /// Offset of the root's length field
    Root { offset: u64, data_length: u32 },
    /// Offset just past the directory's attribute byte
    Directory { offset: u64, data_length: u32 },
}

/// Pull reader over a LOCATEDB stream.
///
/// Owns the stream and all traversal state. Entries come back in stream
/// order: the header, then each root followed by its directories and files
/// depth-first. Reaching the zero-length root ends the traversal.
pub struct LocateDbReader<R> {
    stream: Option<R>,
    settings: ReaderSettings,
    phase: Phase,
    last: Option<SkipTarget>,
    scratch: Vec<u16>,
    filter: Option<Box<dyn EntryFilter>>,
}

impl<R: Read + Seek> LocateDbReader<R> {
    pub fn new(stream: R) -> Result<Self> {
        Self::with_settings(stream, ReaderSettings::default())
    }

    /// Create a reader. Fails with `InvalidUsage` if the stream cannot report
    /// its position; no bytes are consumed.
    pub fn with_settings(mut stream: R, settings: ReaderSettings) -> Result<Self> {
        stream
            .stream_position()
            .map_err(|_| ArchiveError::InvalidUsage("stream must be seekable"))?;

        Ok(Self {
            stream: Some(stream),
            settings,
            phase: Phase::AwaitHeader,
            last: None,
            scratch: Vec::with_capacity(260),
            filter: None,
        })
    }

    /// Consult `filter` for every root, directory and file before returning it
    pub fn with_filter<F: EntryFilter + 'static>(mut self, filter: F) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn settings(&self) -> &ReaderSettings {
        &self.settings
    }

    /// Decode the next entry. `Ok(None)` signals the end of the archive.
    ///
    /// After a fatal error the reader refuses further reads.
    pub fn read_next(&mut self) -> Result<Option<Entry>> {
        match self.phase {
            Phase::Failed => return Err(ArchiveError::InvalidUsage("reader stopped after a fatal error")),
            Phase::Closed => return Err(CLOSED),
            _ => {}
        }

        let result = self.advance();
        if let Err(err) = &result {
            self.fail_on(err);
        }
        result
    }

    /// Skip the subtree of the root or directory returned by the previous
    /// `read_next` call.
    ///
    /// Any other call order, including a second skip in a row, is rejected with
    /// a non-fatal `InvalidUsage` error and leaves the reader untouched.
    pub fn skip_children(&mut self) -> Result<()> {
        if self.last.is_none() {
            return Err(NOTHING_TO_SKIP);
        }

        let result = self.skip_last();
        if let Err(err) = &result {
            self.fail_on(err);
        }
        result
    }

    /// Current offset in the underlying stream
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.stream.as_mut().ok_or(CLOSED)?.stream_position()?)
    }

    /// Release the stream. It is dropped unless `leave_open` is set, in which
    /// case it is handed back. Calling this more than once is harmless.
    pub fn close(&mut self) -> Option<R> {
        self.phase = Phase::Closed;
        self.last = None;

        let stream = self.stream.take()?;
        if self.settings.leave_open {
            Some(stream)
        } else {
            debug!("Closing LOCATEDB stream");
            None
        }
    }

    pub fn is_closed(&self) -> bool {
        self.stream.is_none()
    }

    /// Iterate over the remaining entries. Stops after the end of the archive
    /// or the first error.
    pub fn entries(&mut self) -> Entries<'_, R> {
        Entries { reader: self, finished: false }
    }

    fn fail_on(&mut self, err: &ArchiveError) {
        if err.is_fatal() {
            debug!("LOCATEDB traversal aborted: {}", err);
            self.phase = Phase::Failed;
            self.last = None;
        }
    }

    fn advance(&mut self) -> Result<Option<Entry>> {
        loop {
            self.last = None;

            // Errors leave the reader in `Failed`
            let phase = mem::replace(&mut self.phase, Phase::Failed);
            let stream = self.stream.as_mut().ok_or(CLOSED)?;

            match phase {
                Phase::AwaitHeader => {
                    let header = Header::read(stream, &mut self.scratch)?;
                    self.phase = Phase::AwaitRoot;
                    return Ok(Some(Entry::Header(header)));
                }

                Phase::AwaitRoot => {
                    let offset = stream.stream_position()?;
                    let Some(root) = RootEntry::read(stream, &mut self.scratch)? else {
                        debug!("End of archive at offset {}", offset);
                        self.phase = Phase::Done;
                        return Ok(None);
                    };

                    let root = Arc::new(root);
                    let data_length = root.data_length;
                    self.phase = Phase::AwaitEntry(TreeScope::open(Arc::clone(&root), self.settings.separator));
                    self.last = Some(SkipTarget::Root { offset, data_length });

                    if let Some(entry) = self.filtered(Entry::Root(root))? {
                        return Ok(Some(entry));
                    }
                }

                Phase::AwaitEntry(mut scope) => {
                    let discriminator = u8::read(stream)?;

                    if discriminator == 0 {
                        if scope.depth() == 0 {
                            let trailer = u8::read(stream)?;
                            if trailer != 0 {
                                return Err(ArchiveError::CorruptArchive(format!(
                                    "expected a closing null byte after root {}, read {:#04x}",
                                    scope.root().path,
                                    trailer
                                )));
                            }
                            trace!("Closed root {}", scope.root().path);
                            self.phase = Phase::AwaitRoot;
                        } else {
                            scope.pop_directory();
                            self.phase = Phase::AwaitEntry(scope);
                        }
                        continue;
                    }

                    let attributes = EntryAttributes::from_bits_retain(discriminator);

                    if attributes.contains(EntryAttributes::DIRECTORY) {
                        let offset = stream.stream_position()?;
                        let record = DirectoryRecord::read(stream, attributes, &mut self.scratch)?;
                        let data_length = record.data_length;
                        let dir = scope.push_directory(record);
                        self.phase = Phase::AwaitEntry(scope);
                        self.last = Some(SkipTarget::Directory { offset, data_length });

                        if let Some(entry) = self.filtered(Entry::Directory(dir))? {
                            return Ok(Some(entry));
                        }
                    } else {
                        let record = FileRecord::read(stream, attributes, &mut self.scratch)?;
                        let file = scope.annotate_file(record);
                        self.phase = Phase::AwaitEntry(scope);

                        if let Some(entry) = self.filtered(Entry::File(file))? {
                            return Ok(Some(entry));
                        }
                    }
                }

                Phase::Done => {
                    self.phase = Phase::Done;
                    return Ok(None);
                }

                phase @ (Phase::Failed | Phase::Closed) => {
                    self.phase = phase;
                    return Err(ArchiveError::InvalidUsage("reader cannot continue"));
                }
            }
        }
    }

    /// Apply the filter verdict. Returns the entry if it should be emitted.
    fn filtered(&mut self, entry: Entry) -> Result<Option<Entry>> {
        let action = match self.filter.as_mut() {
            Some(filter) => filter.filter(&entry),
            None => FilterAction::INCLUDE,
        };

        if action.contains(FilterAction::EXCLUDE_CHILDREN) && self.last.is_some() {
            self.skip_last()?;
        }

        if action.contains(FilterAction::EXCLUDE_SELF) {
            Ok(None)
        } else {
            Ok(Some(entry))
        }
    }

    fn skip_last(&mut self) -> Result<()> {
        let target = self.last.take().ok_or(NOTHING_TO_SKIP)?;
        let stream = self.stream.as_mut().ok_or(CLOSED)?;
        let position = stream.stream_position()?;

        match target {
            SkipTarget::Root { offset, data_length } => {
                let end = offset + ROOT_LENGTH_FIELD_SIZE + u64::from(data_length);
                seek_forward(stream, position, end)?;
                debug!("Skipped root subtree, resuming at offset {}", end);
                self.phase = Phase::AwaitRoot;
            }
            SkipTarget::Directory { offset, data_length } => {
                let end = offset + u64::from(data_length);
                seek_forward(stream, position, end)?;
                if let Phase::AwaitEntry(scope) = &mut self.phase {
                    if let Some(dir) = scope.pop_directory() {
                        debug!("Skipped children of {}, resuming at offset {}", dir.full_path(), end);
                    }
                }
            }
        }

        Ok(())
    }
}

/// A declared length never points back into bytes that were already decoded
fn seek_forward<S: Seek>(stream: &mut S, position: u64, target: u64) -> Result<()> {
    if target < position {
        return Err(ArchiveError::CorruptArchive(format!(
            "subtree ends at offset {} but {} bytes were already decoded",
            target, position
        )));
    }
    stream.seek(SeekFrom::Start(target))?;
    Ok(())
}

/// Iterator adapter over [`LocateDbReader::read_next`]
pub struct Entries<'a, R> {
    reader: &'a mut LocateDbReader<R>,
    finished: bool,
}

impl<R: Read + Seek> Iterator for Entries<'_, R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.reader.read_next() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: Read + Seek> FusedIterator for Entries<'_, R> {}
