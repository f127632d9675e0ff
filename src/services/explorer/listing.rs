use std::path::Path;

use crate::services::explorer::types::{FileKind, ManagedFile};

/// Read the managed folder and build the ordered file listing.
///
/// A folder that is missing, unreadable, or vanishes mid-scan yields an
/// empty list rather than an error, so callers can always render the
/// current state of the disk.
pub fn scan_folder(folder: &Path) -> Vec<ManagedFile> {
    let entries = match std::fs::read_dir(folder) {
        Ok(e) => e,
        Err(e) => {
            log::debug!("Could not read demo folder (may not exist yet): {e}");
            return Vec::new();
        }
    };

    let mut files: Vec<ManagedFile> = entries
        .flatten()
        .filter_map(build_managed_file)
        .collect();

    // Ordinal byte-value order: stable across platforms and locales.
    files.sort_by(|a, b| a.name.cmp(&b.name));

    log::debug!("Listed {} managed files in {}", files.len(), folder.display());
    files
}

/// Builds a `ManagedFile` from a filesystem `DirEntry`. Returns `None` if
/// the entry should be skipped (directory, unmanaged extension, or no
/// file name).
fn build_managed_file(entry: std::fs::DirEntry) -> Option<ManagedFile> {
    let path = entry.path();
    if !path.is_file() {
        return None;
    }

    let kind = FileKind::from_path(&path)?;
    let name = path.file_name()?.to_string_lossy().to_string();

    Some(ManagedFile {
        name,
        kind,
        path: path.to_string_lossy().to_string(),
    })
}

#[cfg(test)]
#[path = "tests/listing_tests.rs"]
mod tests;
