use std::io::{Read, Seek, SeekFrom};

use crate::core::error::Result;
use crate::formats::locatedb::constants::{FORMAT_VERSION, LOCATEDB_MARKER};

/// Detected archive format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// `LOCATEDB` marker with the supported `20` version tag
    LocateDb,
    /// `LOCATEDB` marker with some other version tag
    LocateDbUnsupported,
    Unknown,
}

/// Detect the archive format from the stream signature.
///
/// The stream position is restored before returning.
pub fn detect_archive_format<R: Read + Seek>(reader: &mut R) -> Result<ArchiveFormat> {
    let start = reader.stream_position()?;
    let mut signature = [0u8; 10];

    let mut filled = 0;
    while filled < signature.len() {
        let n = reader.read(&mut signature[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    reader.seek(SeekFrom::Start(start))?;

    if filled < LOCATEDB_MARKER.len() || signature[..8] != LOCATEDB_MARKER[..] {
        return Ok(ArchiveFormat::Unknown);
    }

    if filled == signature.len() && signature[8..] == FORMAT_VERSION[..] {
        Ok(ArchiveFormat::LocateDb)
    } else {
        Ok(ArchiveFormat::LocateDbUnsupported)
    }
}
