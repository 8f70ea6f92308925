use std::io::Read;

use log::trace;

use crate::core::error::Result;
use crate::core::filetime::PackedTime;
use crate::formats::locatedb::constants::EntryAttributes;
use crate::formats::locatedb::utils::{read_utf16z, FixedSize};

/// Directory fields as stored on disk, before path annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    pub attributes: EntryAttributes,
    /// Encoded size of the directory, counted from just after its attribute
    /// byte through its closing scope byte.
    pub data_length: u32,
    pub name_length: u8,
    pub name: String,
    pub modified: PackedTime,
    pub created: PackedTime,
    pub accessed: PackedTime,
}

impl DirectoryRecord {
    /// Read the directory fields. `attributes` is the discriminator byte the
    /// caller already consumed.
    pub fn read<R: Read>(reader: &mut R, attributes: EntryAttributes, scratch: &mut Vec<u16>) -> Result<Self> {
        let record = DirectoryRecord {
            attributes,
            data_length: u32::read(reader)?,
            name_length: u8::read(reader)?,
            name: read_utf16z(reader, scratch)?,
            modified: PackedTime::from_dword(u32::read(reader)?),
            created: PackedTime::from_dword(u32::read(reader)?),
            accessed: PackedTime::from_dword(u32::read(reader)?),
        };

        trace!("Directory {} ({} bytes)", record.name, record.data_length);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ArchiveError;
    use std::io::Cursor;

    #[test]
    fn test_read_directory() {
        let modified = PackedTime::new(2020, 4, 15, 13, 45, 12);
        let mut data = Vec::new();
        data.extend_from_slice(&120u32.to_le_bytes());
        data.push(4);
        data.extend("Docs".encode_utf16().flat_map(|u| u.to_le_bytes()));
        data.extend_from_slice(&[0, 0]);
        data.extend_from_slice(&modified.to_dword().to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&u32::MAX.to_le_bytes());

        let mut cursor = Cursor::new(data);
        let attrs = EntryAttributes::DIRECTORY | EntryAttributes::HIDDEN;
        let record = DirectoryRecord::read(&mut cursor, attrs, &mut Vec::new()).unwrap();

        assert_eq!(record.attributes, attrs);
        assert_eq!(record.data_length, 120);
        assert_eq!(record.name_length, 4);
        assert_eq!(record.name, "Docs");
        assert_eq!(record.modified, modified);
        assert_eq!(record.created, PackedTime::new(1980, 0, 0, 0, 0, 0));
        assert!(record.accessed.is_out_of_range());
        assert_eq!(cursor.position() as usize, cursor.get_ref().len());
    }

    #[test]
    fn test_truncated_directory() {
        let mut cursor = Cursor::new(vec![1, 0, 0, 0, 1, b'a', 0, 0, 0, 0]);
        let result = DirectoryRecord::read(&mut cursor, EntryAttributes::DIRECTORY, &mut Vec::new());
        assert!(matches!(result, Err(ArchiveError::UnexpectedEndOfStream)));
    }
}
