use std::path::{Path, PathBuf};

use crate::types::errors::{OpError, OpResult};

/// Rename a managed file, preserving its extension.
///
/// `new_base_name` is validated before any filesystem access: it must be
/// non-blank and a plain file name (no separators or reserved characters).
/// The original extension is appended when the input does not already end
/// with it, case-insensitively. An existing file at the destination fails
/// the rename without moving anything.
pub fn rename_file(file_path: &Path, new_base_name: &str) -> OpResult<PathBuf> {
    let trimmed = new_base_name.trim();
    if trimmed.is_empty() {
        return Err(OpError::InvalidInput("New name must not be empty".to_string()));
    }
    // Anything the sanitizer would rewrite (separators, reserved
    // characters) is rejected outright instead of silently renamed.
    if sanitize_filename::sanitize(trimmed) != trimmed {
        return Err(OpError::InvalidInput(format!(
            "Not a valid file name: {trimmed}"
        )));
    }

    if !file_path.is_file() {
        return Err(OpError::NotFound(file_path.display().to_string()));
    }
    let folder = file_path
        .parent()
        .ok_or_else(|| OpError::InvalidInput(format!("No parent folder: {}", file_path.display())))?;

    let ext = file_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let new_name = if ext.is_empty()
        || trimmed
            .to_lowercase()
            .ends_with(&format!(".{}", ext.to_lowercase()))
    {
        trimmed.to_string()
    } else {
        format!("{trimmed}.{ext}")
    };

    let dest = folder.join(&new_name);
    if dest.exists() {
        return Err(OpError::AlreadyExists(new_name));
    }

    std::fs::rename(file_path, &dest)
        .map_err(|e| OpError::Io(format!("Failed to rename {}: {e}", file_path.display())))?;

    log::info!("Renamed {} -> {}", file_path.display(), dest.display());
    Ok(dest)
}

#[cfg(test)]
#[path = "tests/rename_tests.rs"]
mod tests;
