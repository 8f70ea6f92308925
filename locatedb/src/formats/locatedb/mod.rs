//! Locate32 LOCATEDB archive format
//!
//! Layout, little-endian throughout:
//! - header: `LOCATEDB`, `20`, flags, then creator/description strings,
//!   creation time and totals
//! - one record per root (volume), each followed by its directory tree
//! - a zero root length terminating the archive
//!
//! Inside a root, each entry starts with an attribute byte. A zero byte
//! closes the innermost open directory, or the root itself when no directory
//! is open (followed by a second zero byte).

pub mod constants;
pub mod directory;
pub mod entry;
pub mod file;
pub mod filter;
pub mod header;
pub mod reader;
pub mod root;
pub(crate) mod tracker;
pub mod utils;
