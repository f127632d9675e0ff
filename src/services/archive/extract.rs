use std::fs;
use std::io;
use std::path::Path;

use super::types::ArchiveFormat;
use crate::types::errors::{OpError, OpResult};

/// Extract every demo entry of a supported archive directly into `target`,
/// flattening any internal directory structure and overwriting files of
/// the same name. Non-demo entries are skipped.
///
/// Returns the number of demos written.
pub fn extract_demo_entries(archive_path: &Path, target: &Path) -> OpResult<usize> {
    let format = ArchiveFormat::from_path(archive_path)
        .ok_or_else(|| OpError::UnsupportedType(archive_path.display().to_string()))?;

    if !target.is_dir() {
        return Err(OpError::NotFound(format!(
            "Demo folder missing: {}",
            target.display()
        )));
    }

    let count = match format {
        ArchiveFormat::Zip => extract_zip_demos(archive_path, target)?,
        ArchiveFormat::SevenZ => extract_7z_demos(archive_path, target)?,
    };

    log::info!(
        "Extracted {count} demos from {} into {}",
        archive_path.display(),
        target.display()
    );
    Ok(count)
}

fn is_demo_entry(name: &str) -> bool {
    name.to_lowercase().ends_with(".dem")
}

/// Base name of an archive entry key. Keys may use either separator and
/// may denote directories (trailing separator), which yield `None`.
fn entry_base_name(key: &str) -> Option<String> {
    let normalized = key.replace('\\', "/");
    normalized
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn extract_zip_demos(archive_path: &Path, target: &Path) -> OpResult<usize> {
    let file = fs::File::open(archive_path)
        .map_err(|e| OpError::Io(format!("Failed to open archive: {e}")))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| OpError::Io(format!("Invalid or corrupt ZIP: {e}")))?;

    let mut count: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| OpError::Io(format!("Failed to read entry {i}: {e}")))?;

        if entry.is_dir() || !is_demo_entry(entry.name()) {
            continue;
        }
        let Some(base_name) = entry_base_name(entry.name()) else {
            continue;
        };

        let out_path = target.join(&base_name);
        let mut outfile = fs::File::create(&out_path)
            .map_err(|e| OpError::Io(format!("Failed to create {}: {e}", out_path.display())))?;
        io::copy(&mut entry, &mut outfile)
            .map_err(|e| OpError::Io(format!("Failed to write {}: {e}", out_path.display())))?;
        count += 1;
    }
    Ok(count)
}

fn extract_7z_demos(archive_path: &Path, target: &Path) -> OpResult<usize> {
    let file = fs::File::open(archive_path)
        .map_err(|e| OpError::Io(format!("Failed to open archive: {e}")))?;

    let mut count: usize = 0;
    let mut write_failure: Option<String> = None;

    sevenz_rust::decompress_with_extract_fn(file, target, |entry, reader, _dest| {
        if write_failure.is_some() || entry.is_directory() || !is_demo_entry(entry.name()) {
            return Ok(true);
        }
        let Some(base_name) = entry_base_name(entry.name()) else {
            return Ok(true);
        };

        let out_path = target.join(&base_name);
        let written = fs::File::create(&out_path)
            .and_then(|mut outfile| io::copy(reader, &mut outfile));
        match written {
            Ok(_) => count += 1,
            Err(e) => {
                write_failure = Some(format!("Failed to write {}: {e}", out_path.display()));
            }
        }
        Ok(true)
    })
    .map_err(|e| OpError::Io(format!("Failed to extract 7z: {e}")))?;

    if let Some(failure) = write_failure {
        return Err(OpError::Io(failure));
    }
    Ok(count)
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
