use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "CS2 demo folder manager", long_about = None)]
pub struct Cli {
    /// Managed demo folder; defaults to the detected CS2 install
    #[arg(long, global = true)]
    pub folder: Option<PathBuf>,

    /// Emit machine-readable JSON instead of status lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the demos and archives in the managed folder
    Scan,
    /// Compress one demo into a single-entry zip at maximum compression
    Compress {
        /// Demo file name inside the managed folder
        demo: String,
    },
    /// Extract the demo entries of a zip/7z archive into the folder
    Extract {
        /// Path to the archive to read
        archive: PathBuf,
    },
    /// Bring demos and archives into the folder (drag-and-drop equivalent)
    Ingest {
        /// Files to process, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Rename a managed file, keeping its extension
    Rename {
        /// File name inside the managed folder
        file: String,
        /// New base name (extension optional)
        new_name: String,
    },
    /// Delete a managed file
    Delete {
        /// File name inside the managed folder
        file: String,
    },
    /// Resolve a managed file to the absolute path for clipboard sharing
    Share {
        /// File name inside the managed folder
        file: String,
    },
}
