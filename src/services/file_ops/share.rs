use std::path::{Path, PathBuf};

use crate::types::errors::{OpError, OpResult};

/// Resolve a managed file to the absolute path handed to the clipboard
/// owner. The core only validates and resolves; the presentation layer
/// performs the actual clipboard write.
pub fn share_path(file_path: &Path) -> OpResult<PathBuf> {
    if !file_path.is_file() {
        return Err(OpError::NotFound(file_path.display().to_string()));
    }

    std::fs::canonicalize(file_path)
        .map_err(|e| OpError::Io(format!("Failed to resolve {}: {e}", file_path.display())))
}
