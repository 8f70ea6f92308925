pub mod dword;
pub mod error;
pub mod filetime;
pub mod format;
