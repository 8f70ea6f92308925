use std::io::Read;

use crate::core::error::Result;

// Little-endian fixed size fields
pub trait FixedSize: Sized {
    fn read<R: Read>(reader: &mut R) -> Result<Self>;
}

impl FixedSize for u8 {
    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; 1];
        reader.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

impl FixedSize for u16 {
    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; 2];
        reader.read_exact(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }
}

impl FixedSize for u32 {
    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; 4];
        reader.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}

pub fn read_bytes<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

/// Read a null-terminated run of UTF-16LE code units.
///
/// The terminator is consumed but not returned. `scratch` is cleared and
/// reused so repeated calls do not reallocate. Unpaired surrogates are
/// replaced with U+FFFD.
pub fn read_utf16z<R: Read>(reader: &mut R, scratch: &mut Vec<u16>) -> Result<String> {
    scratch.clear();
    loop {
        let unit = u16::read(reader)?;
        if unit == 0 {
            break;
        }
        scratch.push(unit);
    }
    Ok(String::from_utf16_lossy(scratch))
}
