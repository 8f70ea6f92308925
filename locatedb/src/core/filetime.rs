//! Packed date/time values
//!
//! Locate32 stores timestamps as a DWORD with DOS-style bit fields:
//! - low word:  year since 1980 (7 bits), month (4 bits), day (5 bits)
//! - high word: hour (5 bits), minute (6 bits), seconds / 2 (5 bits)
//!
//! Times are written in local time, so conversion goes through `chrono::Local`.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone, Utc};

use crate::core::dword::split_dword;

pub const BASE_YEAR: u16 = 1980;
pub const MAX_YEAR: u16 = 2099;

/// Decoded packed time. Fields are only bounded by their bit widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl PackedTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self { year, month, day, hour, minute, second }
    }

    pub const fn from_dword(word: u32) -> Self {
        let (low, high) = split_dword(word);
        Self {
            year: (low >> 9) + BASE_YEAR,
            month: ((low >> 5) & 0xF) as u8,
            day: (low & 0x1F) as u8,
            hour: (high >> 11) as u8,
            minute: ((high >> 5) & 0x3F) as u8,
            second: ((high & 0x1F) << 1) as u8,
        }
    }

    /// Pack back into the on-disk layout. Odd seconds are truncated.
    pub const fn to_dword(self) -> u32 {
        let low = ((self.year.wrapping_sub(BASE_YEAR) & 0x7F) << 9)
            | ((self.month as u16 & 0xF) << 5)
            | (self.day as u16 & 0x1F);
        let high = ((self.hour as u16 & 0x1F) << 11)
            | ((self.minute as u16 & 0x3F) << 5)
            | ((self.second as u16 >> 1) & 0x1F);
        (low as u32) | ((high as u32) << 16)
    }

    pub const fn is_out_of_range(&self) -> bool {
        self.year > MAX_YEAR
    }

    /// Convert to a local timestamp.
    ///
    /// Out-of-range values map to [`out_of_range_datetime`]. Returns `None` when
    /// the fields do not name a real calendar date, or the local time does not
    /// exist (DST gap). Ambiguous local times resolve to the earliest instant.
    pub fn to_local_datetime(&self) -> Option<DateTime<Local>> {
        if self.is_out_of_range() {
            return Some(out_of_range_datetime());
        }

        let naive = NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, self.day as u32)?
            .and_hms_opt(self.hour as u32, self.minute as u32, self.second as u32)?;

        Local.from_local_datetime(&naive).earliest()
    }
}

impl From<u32> for PackedTime {
    fn from(word: u32) -> Self {
        PackedTime::from_dword(word)
    }
}

impl fmt::Display for PackedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Sentinel returned for times past 2099: 1970-01-02T00:00:00Z in local time.
pub fn out_of_range_datetime() -> DateTime<Local> {
    (DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(1)).with_timezone(&Local)
}
