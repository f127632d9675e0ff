use std::path::Path;

use anyhow::Result;
use humansize::{format_size, DECIMAL};

use crate::commands::rescan_status;
use crate::services::archive::compress::compress_demo_task;

/// Compress one demo from the managed folder, reporting the size
/// reduction. The heavy work runs on a blocking worker.
pub async fn compress_cmd(folder: &Path, demo: &str, json: bool) -> Result<()> {
    let demo_path = folder.join(demo);
    let result = compress_demo_task(demo_path).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Original: {}", format_size(result.original_size, DECIMAL));
    println!("Compressed: {}", format_size(result.compressed_size, DECIMAL));
    match result.ratio() {
        Some(ratio) => println!("Compression ratio: {ratio:.2}%"),
        None => println!("Compression ratio: n/a (empty source)"),
    }
    println!("Demo compressed successfully");
    println!("{}", rescan_status(folder));
    Ok(())
}
