use std::io::Read;

use log::{debug, warn};

use crate::core::error::{ArchiveError, Result};
use crate::core::filetime::PackedTime;
use crate::formats::locatedb::constants::{ArchiveFlags, FORMAT_VERSION, LOCATEDB_MARKER};
use crate::formats::locatedb::utils::{read_bytes, read_utf16z, FixedSize};

/// Archive header, always the first record of the stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub marker: String,
    pub version: String,
    pub flags: ArchiveFlags,
    /// Byte count of the header fields following this one. Informational.
    pub remaining_extra_bytes: u32,
    pub creator: String,
    pub description: String,
    pub extra_info1: String,
    pub extra_info2: String,
    pub creation_time: PackedTime,
    pub file_count: u32,
    pub directory_count: u32,
}

impl Header {
    pub fn read<R: Read>(reader: &mut R, scratch: &mut Vec<u16>) -> Result<Self> {
        let marker = read_bytes::<R, 8>(reader)?;
        let version = read_bytes::<R, 2>(reader)?;
        let flags = ArchiveFlags::from_bits_retain(u8::read(reader)?);

        if marker != LOCATEDB_MARKER {
            return Err(ArchiveError::IncompatibleFormat("LOCATEDB header marker not found".into()));
        }
        if version != FORMAT_VERSION {
            return Err(ArchiveError::IncompatibleFormat(format!(
                "header version 20 expected but found {}",
                String::from_utf8_lossy(&version)
            )));
        }
        if !flags.contains(ArchiveFlags::LONG_FILE_NAMES) {
            return Err(ArchiveError::IncompatibleFormat(
                "archives without long file names are not supported".into(),
            ));
        }
        if !flags.contains(ArchiveFlags::UNICODE_CHARSET) {
            return Err(ArchiveError::IncompatibleFormat("only unicode archives are supported".into()));
        }
        if flags.contains(ArchiveFlags::ANSI_CHARSET) {
            warn!("Archive declares both ANSI and Unicode charsets, decoding as Unicode");
        }

        let header = Header {
            marker: String::from_utf8_lossy(&marker).into_owned(),
            version: String::from_utf8_lossy(&version).into_owned(),
            flags,
            remaining_extra_bytes: u32::read(reader)?,
            creator: read_utf16z(reader, scratch)?,
            description: read_utf16z(reader, scratch)?,
            extra_info1: read_utf16z(reader, scratch)?,
            extra_info2: read_utf16z(reader, scratch)?,
            creation_time: PackedTime::from_dword(u32::read(reader)?),
            file_count: u32::read(reader)?,
            directory_count: u32::read(reader)?,
        };

        debug!(
            "LOCATEDB header: creator {:?}, {} files, {} directories",
            header.creator, header.file_count, header.directory_count
        );

        Ok(header)
    }
}
