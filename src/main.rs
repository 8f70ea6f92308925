//! locate64 - Browse Locate32 LOCATEDB index files

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use locatedb::{Entry, PathPrefixFilter, ReaderSettings};

mod cli;
mod listing;
use cli::{Cli, Commands};
use listing::{open_reader, ListedEntry};

const PROGRESS_INTERVAL: u64 = 256;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { database } => {
            let mut reader = open_reader(&database, ReaderSettings::default())?;

            while let Some(entry) = reader.read_next()? {
                match entry {
                    Entry::Header(header) => {
                        println!("LOCATEDB archive: {}", database.display());
                        println!("  Version: {}", header.version);
                        println!("  Creator: {}", header.creator);
                        println!("  Description: {}", header.description);
                        if !header.extra_info1.is_empty() || !header.extra_info2.is_empty() {
                            println!("  Extra: {} / {}", header.extra_info1, header.extra_info2);
                        }
                        println!("  Created: {}", header.creation_time);
                        println!("  Files: {}", header.file_count);
                        println!("  Directories: {}", header.directory_count);
                        println!();
                    }
                    Entry::Root(root) => {
                        println!("Root: {} ({:?})", root.path, root.kind);
                        println!("  Volume label: {}", root.volume_label);
                        println!("  Serial: {:08X}", root.volume_serial);
                        println!("  File system: {}", root.file_system);
                        println!("  Files: {}, directories: {}", root.file_count, root.directory_count);
                        reader.skip_children()?;
                    }
                    _ => {}
                }
            }

            Ok(())
        }

        Commands::List { database, prune, dirs_only, files_only, json, separator } => {
            let settings = ReaderSettings { separator, ..ReaderSettings::default() };
            let mut reader = open_reader(&database, settings)?.with_filter(PathPrefixFilter::new(prune));

            for entry in reader.entries() {
                let entry = entry.with_context(|| format!("Failed to read {}", database.display()))?;
                let wanted = match &entry {
                    Entry::Header(_) => false,
                    Entry::Root(_) => !files_only,
                    Entry::Directory(_) => !files_only,
                    Entry::File(_) => !dirs_only,
                };
                if !wanted {
                    continue;
                }

                if json {
                    if let Some(listed) = ListedEntry::from_entry(&entry) {
                        println!("{}", serde_json::to_string(&listed)?);
                    }
                } else if let Some(path) = entry.full_path() {
                    println!("{}", path);
                }
            }

            Ok(())
        }

        Commands::Stats { database } => {
            let total_bytes = std::fs::metadata(&database)
                .with_context(|| format!("Failed to stat {}", database.display()))?
                .len();
            let mut reader = open_reader(&database, ReaderSettings::default())?;

            let pb = ProgressBar::new(total_bytes);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")?
                    .progress_chars("#>-"),
            );

            let mut header = None;
            let mut roots = 0u64;
            let mut files = 0u64;
            let mut directories = 0u64;
            let mut total_size = 0u64;
            let mut seen = 0u64;

            while let Some(entry) = reader.read_next()? {
                match entry {
                    Entry::Header(h) => header = Some(h),
                    Entry::Root(root) => {
                        roots += 1;
                        pb.set_message(root.path.clone());
                    }
                    Entry::Directory(_) => directories += 1,
                    Entry::File(file) => {
                        files += 1;
                        total_size += file.size();
                    }
                }

                seen += 1;
                if seen % PROGRESS_INTERVAL == 0 {
                    pb.set_position(reader.position()?);
                }
            }

            pb.set_position(reader.position()?);
            pb.finish_with_message("Complete");

            println!();
            println!("Statistics for {}:", database.display());
            println!("  Roots: {}", roots);
            println!("  Directories: {}", directories);
            println!("  Files: {}", files);
            println!("  Total size: {} MB", total_size / 1_000_000);

            if let Some(header) = header {
                let files_match = u64::from(header.file_count) == files;
                let dirs_match = u64::from(header.directory_count) == directories;
                if files_match && dirs_match {
                    println!("  Header totals match");
                } else {
                    println!(
                        "  Header totals differ: header declares {} files and {} directories",
                        header.file_count, header.directory_count
                    );
                }
            }

            Ok(())
        }
    }
}
