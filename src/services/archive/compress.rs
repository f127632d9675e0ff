use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::services::explorer::types::FileKind;
use crate::types::errors::{OpError, OpResult};
use crate::types::results::CompressionResult;

/// Deflate's smallest-size setting.
const MAX_DEFLATE_LEVEL: i64 = 9;

/// Compress one demo into a single-entry zip next to it.
///
/// The archive lands at `<stem>.zip` in the same folder, containing
/// exactly one entry named like the source file, and replaces any
/// existing archive of that name. The zip is written to a temp file in
/// the folder and renamed into place, so a failed run never leaves a
/// truncated archive under the destination name.
pub fn compress_demo(demo_path: &Path) -> OpResult<CompressionResult> {
    if FileKind::from_path(demo_path) != Some(FileKind::Demo) {
        return Err(OpError::InvalidInput(format!(
            "Not a demo file: {}",
            demo_path.display()
        )));
    }
    let demo_name = demo_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| OpError::InvalidInput(format!("No file name: {}", demo_path.display())))?;
    let folder = demo_path
        .parent()
        .ok_or_else(|| OpError::InvalidInput(format!("No parent folder: {}", demo_path.display())))?;

    let original_size = match fs::metadata(demo_path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(OpError::NotFound(demo_path.display().to_string()));
        }
        Err(e) => return Err(OpError::Io(format!("Failed to stat demo: {e}"))),
    };

    let zip_path = demo_path.with_extension("zip");
    log::info!(
        "Compressing {} ({original_size} bytes) -> {}",
        demo_path.display(),
        zip_path.display()
    );

    let tmp = NamedTempFile::new_in(folder)
        .map_err(|e| OpError::Io(format!("Failed to create temp archive: {e}")))?;

    let mut writer = ZipWriter::new(tmp);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(MAX_DEFLATE_LEVEL))
        // Demos can exceed the zip32 size limit.
        .large_file(original_size >= u64::from(u32::MAX));
    writer
        .start_file(demo_name, options)
        .map_err(|e| OpError::Io(format!("Failed to start archive entry: {e}")))?;

    let mut source = fs::File::open(demo_path)
        .map_err(|e| OpError::Io(format!("Failed to open demo: {e}")))?;
    io::copy(&mut source, &mut writer)
        .map_err(|e| OpError::Io(format!("Failed to compress demo: {e}")))?;

    let tmp = writer
        .finish()
        .map_err(|e| OpError::Io(format!("Failed to finish archive: {e}")))?;

    // Atomic replace; an existing archive of the same name is overwritten.
    tmp.persist(&zip_path)
        .map_err(|e| OpError::Io(format!("Failed to finalize archive: {e}")))?;

    let compressed_size = fs::metadata(&zip_path)
        .map_err(|e| OpError::Io(format!("Failed to stat archive: {e}")))?
        .len();

    Ok(CompressionResult {
        original_size,
        compressed_size,
    })
}

/// Run `compress_demo` on a blocking worker so the interactive flow stays
/// responsive. One await point; no cancellation once started.
pub async fn compress_demo_task(demo_path: PathBuf) -> OpResult<CompressionResult> {
    tokio::task::spawn_blocking(move || compress_demo(&demo_path))
        .await
        .map_err(|e| OpError::Io(format!("Compression task failed: {e}")))?
}

#[cfg(test)]
#[path = "tests/compress_tests.rs"]
mod tests;
