use std::path::Path;

use anyhow::Result;

use crate::commands::rescan_status;
use crate::services::file_ops::{delete, rename, share};

/// Rename a managed file, preserving its extension.
pub fn rename_cmd(folder: &Path, file: &str, new_name: &str, json: bool) -> Result<()> {
    let dest = rename::rename_file(&folder.join(file), new_name)?;

    if json {
        println!("{}", serde_json::to_string(&dest)?);
        return Ok(());
    }

    println!("Renamed {file} -> {}", dest.display());
    println!("{}", rescan_status(folder));
    Ok(())
}

/// Delete a managed file.
pub fn delete_cmd(folder: &Path, file: &str, json: bool) -> Result<()> {
    delete::delete_file(&folder.join(file))?;

    if json {
        println!("{}", serde_json::to_string(&serde_json::json!({ "deleted": file }))?);
        return Ok(());
    }

    println!("Deleted {file}");
    println!("{}", rescan_status(folder));
    Ok(())
}

/// Print the absolute path of a managed file for clipboard sharing.
pub fn share_cmd(folder: &Path, file: &str, json: bool) -> Result<()> {
    let path = share::share_path(&folder.join(file))?;

    if json {
        println!("{}", serde_json::to_string(&path)?);
        return Ok(());
    }

    println!("{}", path.display());
    Ok(())
}
