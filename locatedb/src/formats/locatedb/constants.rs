use bitflags::bitflags;

pub const LOCATEDB_MARKER: [u8; 8] = *b"LOCATEDB";
pub const FORMAT_VERSION: [u8; 2] = *b"20";

/// Size of the root length field, which its declared length does not cover
pub const ROOT_LENGTH_FIELD_SIZE: u64 = 4;

bitflags! {
    /// Archive-wide flags stored in the header
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ArchiveFlags: u8 {
        const LONG_FILE_NAMES = 0x01;
        const ANSI_CHARSET    = 0x10;
        const UNICODE_CHARSET = 0x20;
    }
}

bitflags! {
    /// Attribute bits of a directory or file entry. The same byte doubles as
    /// the entry discriminator.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EntryAttributes: u8 {
        const HIDDEN         = 0x01;
        const READ_ONLY      = 0x02;
        const ARCHIVE        = 0x04;
        const SYSTEM         = 0x08;
        const FILE           = 0x10;
        const SYMLINK        = 0x20;
        const JUNCTION_POINT = 0x40;
        const DIRECTORY      = 0x80;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    Unknown = 0x00,
    Fixed = 0x10,
    Removable = 0x20,
    CdRom = 0x30,
    Remote = 0x40,
    Ramdisk = 0x50,
    Directory = 0xF0,
}

impl From<u8> for RootKind {
    fn from(v: u8) -> Self {
        match v {
            0x10 => RootKind::Fixed,
            0x20 => RootKind::Removable,
            0x30 => RootKind::CdRom,
            0x40 => RootKind::Remote,
            0x50 => RootKind::Ramdisk,
            0xF0 => RootKind::Directory,
            _ => RootKind::Unknown,
        }
    }
}

impl From<RootKind> for u8 {
    fn from(val: RootKind) -> Self {
        val as u8
    }
}
