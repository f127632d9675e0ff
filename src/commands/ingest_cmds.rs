use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::commands::rescan_status;
use crate::services::archive::extract::extract_demo_entries;
use crate::services::ingest::ingest_paths;
use crate::types::results::IngestStatus;

/// Process a batch of external files, the drag-and-drop equivalent.
pub fn ingest_cmd(folder: &Path, files: &[PathBuf], json: bool) -> Result<()> {
    let outcomes = ingest_paths(files, folder);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    for outcome in &outcomes {
        match &outcome.status {
            IngestStatus::Copied => println!("Copied {}", outcome.source),
            IngestStatus::Extracted { demos } => {
                println!("Extracted {demos} demos from {}", outcome.source)
            }
            IngestStatus::Failed(e) => eprintln!("Error processing {}: {e}", outcome.source),
        }
    }
    println!("{}", rescan_status(folder));
    Ok(())
}

/// Extract the demo entries of a single archive into the folder.
pub fn extract_cmd(folder: &Path, archive: &Path, json: bool) -> Result<()> {
    let demos = extract_demo_entries(archive, folder)?;

    if json {
        println!("{}", serde_json::to_string(&serde_json::json!({ "demos": demos }))?);
        return Ok(());
    }

    println!("Extracted {demos} demos from {}", archive.display());
    println!("{}", rescan_status(folder));
    Ok(())
}
