use std::io::Read;

use log::trace;

use crate::core::error::Result;
use crate::core::filetime::PackedTime;
use crate::formats::locatedb::constants::EntryAttributes;
use crate::formats::locatedb::utils::{read_utf16z, FixedSize};

/// File fields as stored on disk, before path annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub attributes: EntryAttributes,
    pub name_length: u8,
    /// Character offset into `name` where the extension starts
    pub extension_index: u8,
    pub name: String,
    pub size: u64,
    pub modified: PackedTime,
    pub created: PackedTime,
    pub accessed: PackedTime,
}

impl FileRecord {
    /// Read the file fields. `attributes` is the discriminator byte the caller
    /// already consumed.
    pub fn read<R: Read>(reader: &mut R, attributes: EntryAttributes, scratch: &mut Vec<u16>) -> Result<Self> {
        let name_length = u8::read(reader)?;
        let extension_index = u8::read(reader)?;
        let name = read_utf16z(reader, scratch)?;

        let size_low = u32::read(reader)?;
        let size_high = u16::read(reader)?;

        let record = FileRecord {
            attributes,
            name_length,
            extension_index,
            name,
            size: (u64::from(size_high) << 32) | u64::from(size_low),
            modified: PackedTime::from_dword(u32::read(reader)?),
            created: PackedTime::from_dword(u32::read(reader)?),
            accessed: PackedTime::from_dword(u32::read(reader)?),
        };

        trace!("File {} ({} bytes)", record.name, record.size);
        Ok(record)
    }

    /// Extension without the dot, if the extension index points inside the name.
    /// The index counts UTF-16 code units, like `name_length`.
    pub fn extension(&self) -> Option<&str> {
        let target = usize::from(self.extension_index);
        let mut units = 0;
        for (offset, c) in self.name.char_indices() {
            if units == target {
                return Some(&self.name[offset..]);
            }
            if units > target {
                return None;
            }
            units += c.len_utf16();
        }
        None
    }
}
