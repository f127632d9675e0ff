use std::fs;
use std::path::{Path, PathBuf};

use crate::services::archive::extract::extract_demo_entries;
use crate::services::archive::types::ArchiveFormat;
use crate::types::errors::{OpError, OpResult};
use crate::types::results::{IngestOutcome, IngestStatus};

/// Bring a batch of external files into the managed folder.
///
/// Files are processed strictly in the order given, each to completion
/// before the next begins. A failure on one file is recorded in its
/// outcome and the rest of the batch still runs.
pub fn ingest_paths(sources: &[PathBuf], folder: &Path) -> Vec<IngestOutcome> {
    sources
        .iter()
        .map(|source| {
            let status = match ingest_one(source, folder) {
                Ok(status) => status,
                Err(e) => {
                    log::warn!("Ingest failed for {}: {e}", source.display());
                    IngestStatus::Failed(e)
                }
            };
            IngestOutcome {
                source: source.display().to_string(),
                status,
            }
        })
        .collect()
}

/// Triage one incoming file by extension: demos are copied in (last write
/// wins), archives have their demo entries extracted, anything else is
/// rejected.
fn ingest_one(source: &Path, folder: &Path) -> OpResult<IngestStatus> {
    if !folder.is_dir() {
        return Err(OpError::NotFound(format!(
            "Demo folder missing: {}",
            folder.display()
        )));
    }

    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if ext == crate::DEMO_EXT {
        let file_name = source
            .file_name()
            .ok_or_else(|| OpError::InvalidInput(format!("No file name: {}", source.display())))?;
        let dest = folder.join(file_name);
        fs::copy(source, &dest)
            .map_err(|e| OpError::Io(format!("Failed to copy {}: {e}", source.display())))?;
        log::info!("Copied {} into {}", source.display(), folder.display());
        return Ok(IngestStatus::Copied);
    }

    match ArchiveFormat::from_path(source) {
        Some(_) => {
            let demos = extract_demo_entries(source, folder)?;
            Ok(IngestStatus::Extracted { demos })
        }
        None => Err(OpError::UnsupportedType(if ext.is_empty() {
            source.display().to_string()
        } else {
            format!(".{ext}")
        })),
    }
}

#[cfg(test)]
#[path = "tests/ingest_tests.rs"]
mod tests;
