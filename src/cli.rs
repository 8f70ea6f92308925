//! Command-line interface for locate64

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "locate64")]
#[command(about = "locate64 - Browse Locate32 LOCATEDB index files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the archive header and the indexed volumes
    Info {
        /// LOCATEDB file (.dbs)
        database: PathBuf,
    },

    /// List indexed paths
    List {
        /// LOCATEDB file (.dbs)
        database: PathBuf,

        /// Do not descend into this directory or volume (can be specified multiple times)
        #[arg(long)]
        prune: Vec<String>,

        /// Only list directories
        #[arg(long, conflicts_with = "files_only")]
        dirs_only: bool,

        /// Only list files
        #[arg(long)]
        files_only: bool,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,

        /// Path separator used to build full paths
        #[arg(long, default_value = "\\")]
        separator: char,
    },

    /// Count entries and compare them with the header totals
    Stats {
        /// LOCATEDB file (.dbs)
        database: PathBuf,
    },
}
