use std::path::Path;

use crate::types::errors::{OpError, OpResult};

/// Delete a managed file permanently. There is no trash or undo; the
/// confirmation prompt, if any, belongs to the presentation layer.
pub fn delete_file(file_path: &Path) -> OpResult<()> {
    std::fs::remove_file(file_path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => OpError::NotFound(file_path.display().to_string()),
        _ => OpError::Io(format!("Failed to delete {}: {e}", file_path.display())),
    })?;

    log::info!("Deleted {}", file_path.display());
    Ok(())
}
