use std::io::Read;

use log::debug;

use crate::core::error::Result;
use crate::formats::locatedb::constants::RootKind;
use crate::formats::locatedb::utils::{read_utf16z, FixedSize};

/// Indexed volume. Owns the directories and files that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootEntry {
    /// Encoded size of this volume's record and subtree, not counting the
    /// length field itself.
    pub data_length: u32,
    pub kind: RootKind,
    pub path: String,
    pub volume_label: String,
    pub volume_serial: u32,
    pub file_system: String,
    pub file_count: u32,
    pub directory_count: u32,
}

impl RootEntry {
    /// Read the next root. `Ok(None)` is the end-of-archive sentinel.
    pub fn read<R: Read>(reader: &mut R, scratch: &mut Vec<u16>) -> Result<Option<Self>> {
        let data_length = u32::read(reader)?;
        if data_length == 0 {
            return Ok(None);
        }

        let root = RootEntry {
            data_length,
            kind: RootKind::from(u8::read(reader)?),
            path: read_utf16z(reader, scratch)?,
            volume_label: read_utf16z(reader, scratch)?,
            volume_serial: u32::read(reader)?,
            file_system: read_utf16z(reader, scratch)?,
            file_count: u32::read(reader)?,
            directory_count: u32::read(reader)?,
        };

        debug!("Root {} ({:?}, {}), {} bytes", root.path, root.kind, root.volume_label, data_length);
        Ok(Some(root))
    }

    /// Full path of the volume, which is its root path
    pub fn full_path(&self) -> &str {
        &self.path
    }
}
