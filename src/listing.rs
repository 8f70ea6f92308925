//! Opening databases and rendering entries for output

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use locatedb::{detect_archive_format, ArchiveFormat, Entry, LocateDbReader, ReaderSettings};
use serde::Serialize;

pub type DbReader = LocateDbReader<BufReader<File>>;

/// Open a database file after checking its signature
pub fn open_reader(path: &Path, settings: ReaderSettings) -> Result<DbReader> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut stream = BufReader::new(file);

    match detect_archive_format(&mut stream)? {
        ArchiveFormat::LocateDb => {}
        ArchiveFormat::LocateDbUnsupported => {
            bail!("{} uses an unsupported LOCATEDB version", path.display())
        }
        ArchiveFormat::Unknown => bail!("{} is not a LOCATEDB file", path.display()),
    }

    Ok(LocateDbReader::with_settings(stream, settings)?)
}

/// One line of `list --json` output
#[derive(Debug, Serialize)]
pub struct ListedEntry<'a> {
    pub kind: &'static str,
    pub path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    pub attributes: u8,
}

impl<'a> ListedEntry<'a> {
    /// Roots, directories and files have a listing. Headers do not.
    pub fn from_entry(entry: &'a Entry) -> Option<Self> {
        match entry {
            Entry::Header(_) => None,
            Entry::Root(root) => Some(Self {
                kind: "root",
                path: root.full_path(),
                size: None,
                modified: None,
                attributes: 0,
            }),
            Entry::Directory(dir) => Some(Self {
                kind: "directory",
                path: dir.full_path(),
                size: None,
                modified: Some(dir.record().modified.to_string()),
                attributes: dir.record().attributes.bits(),
            }),
            Entry::File(file) => Some(Self {
                kind: "file",
                path: file.full_path(),
                size: Some(file.size()),
                modified: Some(file.record().modified.to_string()),
                attributes: file.record().attributes.bits(),
            }),
        }
    }
}
