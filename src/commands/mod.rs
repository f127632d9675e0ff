use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

pub mod compress_cmds;
pub mod file_cmds;
pub mod folder_cmds;
pub mod ingest_cmds;

/// Resolve the managed folder: an explicit `--folder` wins, otherwise the
/// detected CS2 install.
pub fn resolve_folder(folder: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(folder) = folder {
        return Ok(folder);
    }
    match crate::services::steam::detect_demo_folder() {
        Some(path) => {
            log::info!("Using detected CS2 demo folder: {}", path.display());
            Ok(path)
        }
        None => bail!("CS2 installation not found; pass --folder to select one manually"),
    }
}

/// Re-run the folder index after a mutation so the reported state always
/// reflects actual disk contents.
pub fn rescan_status(folder: &Path) -> String {
    let files = crate::services::explorer::listing::scan_folder(folder);
    format!("Found {} files", files.len())
}
