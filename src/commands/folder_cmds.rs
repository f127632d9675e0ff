use std::path::Path;

use anyhow::Result;

use crate::services::explorer::listing::scan_folder;
use crate::services::explorer::types::FileKind;

/// List the managed folder contents.
pub fn scan_cmd(folder: &Path, json: bool) -> Result<()> {
    let files = scan_folder(folder);

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    for file in &files {
        let tag = match file.kind {
            FileKind::Demo => "dem",
            FileKind::Archive => "zip",
        };
        println!("{tag}  {}", file.name);
    }
    println!("Found {} files", files.len());
    Ok(())
}
