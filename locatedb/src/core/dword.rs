//! 32-bit word split into its 16-bit halves

/// Split a DWORD into `(low, high)` 16-bit halves
pub const fn split_dword(word: u32) -> (u16, u16) {
    ((word & 0xFFFF) as u16, (word >> 16) as u16)
}

/// Raw DWORD as stored in the archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DWord(pub u32);

impl DWord {
    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn low(self) -> u16 {
        split_dword(self.0).0
    }

    pub const fn high(self) -> u16 {
        split_dword(self.0).1
    }
}

impl From<u32> for DWord {
    fn from(v: u32) -> Self {
        DWord(v)
    }
}

impl From<DWord> for u32 {
    fn from(val: DWord) -> Self {
        val.0
    }
}
